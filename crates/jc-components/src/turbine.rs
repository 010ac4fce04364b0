//! Turbine model.

use crate::common::{check_efficiency, outlet_state};
use crate::error::{ComponentError, ComponentResult};
use crate::station::Station;
use crate::traits::Stage;
use jc_core::units::{Temperature, k};
use jc_gas::{GasProperties, StagnationState};

/// Compressor duty the turbine must supply, threaded in by the orchestrator.
///
/// The turbine couples to two non-adjacent upstream stages, so these values
/// are passed explicitly on every call instead of being stored on the stage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurbineDuty {
    /// Compressor inlet stagnation temperature (T02).
    pub compressor_inlet: Temperature,
    /// Compressor outlet stagnation temperature (T03).
    pub compressor_outlet: Temperature,
    /// Combustor fuel-air ratio (f).
    pub fuel_air_ratio: f64,
}

/// Single-spool turbine driving the compressor.
///
/// ## Model
///
/// Work extracted per kg of gas equals compressor work per kg of air divided
/// by the mass increase from fuel:
///
/// ```text
/// T05  = T04 − (T03 − T02)/(1 + f)
/// T05s = T04 − (T04 − T05)/η_t
/// P05  = P04 (T05s/T04)^(γ/(γ−1))
/// ```
#[derive(Clone, Debug)]
pub struct Turbine {
    eta: f64,
    gas: GasProperties,
}

impl Turbine {
    pub const NAME: &'static str = "turbine";

    /// # Errors
    /// Returns a configuration error if `eta` is outside (0, 1].
    pub fn new(eta: f64, gas: GasProperties) -> ComponentResult<Self> {
        let eta = check_efficiency(Self::NAME, eta)?;
        Ok(Self { eta, gas })
    }

    pub fn outlet(
        &self,
        inlet: &StagnationState,
        duty: &TurbineDuty,
    ) -> ComponentResult<StagnationState> {
        let gamma = self.gas.gamma();
        let p04 = inlet.pressure();
        let t04 = inlet.temperature().value;

        let mass_factor = 1.0 + duty.fuel_air_ratio;
        if !(mass_factor > 0.0) {
            return Err(ComponentError::Configuration {
                stage: Self::NAME,
                what: "1 + fuel-air ratio must be positive",
            });
        }

        let compressor_rise = duty.compressor_outlet.value - duty.compressor_inlet.value;
        let drop = compressor_rise / mass_factor;
        let t05 = t04 - drop;

        let t05s = t04 - drop / self.eta;
        if !(t05s > 0.0) {
            return Err(ComponentError::Infeasible {
                stage: Self::NAME,
                what: "turbine cannot supply compressor work",
                detail: format!(
                    "T04={:.2} K, required drop={:.2} K, eta={}, T05s={:.2} K",
                    t04, drop, self.eta, t05s
                ),
            });
        }

        let p05 = p04 * (t05s / t04).powf(gamma / (gamma - 1.0));

        outlet_state(Self::NAME, p05, k(t05))
    }
}

impl Stage for Turbine {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn outlet_station(&self) -> Station {
        Station::TurbineExit
    }

    fn efficiency(&self) -> f64 {
        self.eta
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use jc_core::units::pa;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn work_matches_compressor(
            t02 in 220.0_f64..350.0,
            rise in 50.0_f64..500.0,
            t04 in 1100.0_f64..1800.0,
            f in 0.0_f64..0.05,
            eta in 0.7_f64..1.0,
        ) {
            let turbine = Turbine::new(eta, GasProperties::air()).unwrap();
            let inlet = StagnationState::from_pt(pa(1_500_000.0), k(t04)).unwrap();
            let duty = TurbineDuty {
                compressor_inlet: k(t02),
                compressor_outlet: k(t02 + rise),
                fuel_air_ratio: f,
            };
            let s05 = turbine.outlet(&inlet, &duty).unwrap();
            let turbine_work = (1.0 + f) * (t04 - s05.temperature().value);
            prop_assert!((turbine_work - rise).abs() < 1e-9 * rise.max(1.0) * 10.0);
            prop_assert!(s05.pressure().value < 1_500_000.0);
        }
    }
}
