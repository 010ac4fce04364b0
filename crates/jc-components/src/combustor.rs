//! Primary combustor model.

use crate::common::{check_efficiency, check_positive, fuel_air_denominator, outlet_state};
use crate::error::{ComponentError, ComponentResult};
use crate::station::Station;
use crate::traits::Stage;
use jc_core::units::{SpecEnergy, Temperature};
use jc_gas::{GasProperties, StagnationState};

/// Isobaric burner driven to a target turbine-inlet temperature.
///
/// ## Model
///
/// ```text
/// f   = (T04 − T03) / (η_b Qr / cp − T04)
/// P04 = P03
/// ```
///
/// The denominator only depends on construction parameters, so a fuel that
/// cannot reach `T04` is rejected by [`Combustor::new`].
#[derive(Clone, Debug)]
pub struct Combustor {
    target: Temperature,
    eta: f64,
    denom: f64,
}

/// Combustor outlet: stagnation state plus the solved fuel-air ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombustorOutlet {
    pub state: StagnationState,
    pub fuel_air_ratio: f64,
}

impl Combustor {
    pub const NAME: &'static str = "combustor";

    /// # Errors
    /// - Configuration error for a non-positive target temperature or heating
    ///   value, or an efficiency outside (0, 1].
    /// - Infeasible error if `η_b Qr / cp ≤ T04`.
    pub fn new(
        target: Temperature,
        heating_value: SpecEnergy,
        eta: f64,
        gas: GasProperties,
    ) -> ComponentResult<Self> {
        check_positive(Self::NAME, target.value, "target temperature")?;
        check_positive(Self::NAME, heating_value, "fuel heating value")?;
        let eta = check_efficiency(Self::NAME, eta)?;
        let denom = fuel_air_denominator(Self::NAME, eta, heating_value, target, &gas)?;
        Ok(Self {
            target,
            eta,
            denom,
        })
    }

    /// Target outlet stagnation temperature (T04).
    pub fn target_temperature(&self) -> Temperature {
        self.target
    }

    pub fn outlet(&self, inlet: &StagnationState) -> ComponentResult<CombustorOutlet> {
        let t03 = inlet.temperature().value;
        let t04 = self.target.value;

        if t04 < t03 {
            return Err(ComponentError::Infeasible {
                stage: Self::NAME,
                what: "target temperature is below inlet temperature",
                detail: format!("T03={:.2} K, T04={:.2} K", t03, t04),
            });
        }

        let fuel_air_ratio = (t04 - t03) / self.denom;
        let state = outlet_state(Self::NAME, inlet.pressure(), self.target)?;

        Ok(CombustorOutlet {
            state,
            fuel_air_ratio,
        })
    }
}

impl Stage for Combustor {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn outlet_station(&self) -> Station {
        Station::CombustorExit
    }

    fn efficiency(&self) -> f64 {
        self.eta
    }
}
