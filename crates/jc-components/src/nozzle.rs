//! Exhaust nozzle model.

use crate::common::check_efficiency;
use crate::error::{ComponentError, ComponentResult};
use crate::station::Station;
use crate::traits::Stage;
use jc_core::units::{Pressure, Temperature, Velocity, k, mps};
use jc_gas::{GasProperties, StagnationState};

/// Nozzle exit conditions: the chain terminus produces no stagnation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NozzleExit {
    pub velocity: Velocity,
    pub temperature: Temperature,
}

/// Convergent-divergent nozzle fully expanded to ambient pressure.
///
/// ## Model
///
/// ```text
/// Tes = T0 (Pa/P0)^((γ−1)/γ)
/// Te  = T0 − η_n (T0 − Tes)
/// ue  = sqrt(2 cp (T0 − Te))
/// ```
#[derive(Clone, Debug)]
pub struct Nozzle {
    eta: f64,
    gas: GasProperties,
}

impl Nozzle {
    pub const NAME: &'static str = "nozzle";

    /// # Errors
    /// Returns a configuration error if `eta` is outside (0, 1].
    pub fn new(eta: f64, gas: GasProperties) -> ComponentResult<Self> {
        let eta = check_efficiency(Self::NAME, eta)?;
        Ok(Self { eta, gas })
    }

    /// Expand `inlet` to `ambient_pressure`.
    ///
    /// # Errors
    /// Infeasible if the ambient pressure is not below the inlet stagnation
    /// pressure, or if the expansion would not cool the gas.
    pub fn exhaust(
        &self,
        inlet: &StagnationState,
        ambient_pressure: Pressure,
    ) -> ComponentResult<NozzleExit> {
        let p0 = inlet.pressure().value;
        let t0 = inlet.temperature().value;
        let p_a = ambient_pressure.value;

        let expansion_ratio = p_a / p0;
        if !(expansion_ratio < 1.0) {
            return Err(ComponentError::Infeasible {
                stage: Self::NAME,
                what: "ambient pressure is not below nozzle inlet stagnation pressure",
                detail: format!("P0={:.1} Pa, Pa={:.1} Pa", p0, p_a),
            });
        }

        let t_es = t0 * expansion_ratio.powf(self.gas.isentropic_exponent());
        let t_e = t0 - self.eta * (t0 - t_es);
        if t_es > t0 || t_e > t0 {
            return Err(ComponentError::Infeasible {
                stage: Self::NAME,
                what: "exit temperature exceeds inlet stagnation temperature",
                detail: format!("T0={:.2} K, Tes={:.2} K, Te={:.2} K", t0, t_es, t_e),
            });
        }

        let radicand = 2.0 * self.gas.cp() * (t0 - t_e);
        if !(radicand >= 0.0) {
            return Err(ComponentError::Infeasible {
                stage: Self::NAME,
                what: "negative kinetic energy at nozzle exit",
                detail: format!("2*cp*(T0-Te)={radicand}"),
            });
        }

        Ok(NozzleExit {
            velocity: mps(radicand.sqrt()),
            temperature: k(t_e),
        })
    }
}

impl Stage for Nozzle {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn outlet_station(&self) -> Station {
        Station::NozzleExit
    }

    fn efficiency(&self) -> f64 {
        self.eta
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jc_core::units::pa;
    use jc_core::{Tolerances, nearly_equal};

    fn inlet() -> StagnationState {
        StagnationState::from_pt(pa(300_000.0), k(900.0)).unwrap()
    }

    #[test]
    fn ideal_nozzle_conserves_entropy() {
        let gas = GasProperties::new(1.4, 287.0).unwrap();
        let nozzle = Nozzle::new(1.0, gas).unwrap();
        let exit = nozzle.exhaust(&inlet(), pa(101_325.0)).unwrap();

        let t_e = exit.temperature.value;
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-12,
        };
        assert!(nearly_equal(
            t_e / 900.0,
            (101_325.0_f64 / 300_000.0).powf(0.4 / 1.4),
            tol
        ));
        assert!(nearly_equal(
            exit.velocity.value,
            (2.0 * gas.cp() * (900.0 - t_e)).sqrt(),
            tol
        ));

        let ds = gas.entropy_change(pa(300_000.0), k(900.0), pa(101_325.0), exit.temperature);
        assert!(ds.abs() < 1e-9);
    }

    #[test]
    fn losses_reduce_exit_velocity() {
        let gas = GasProperties::air();
        let ideal = Nozzle::new(1.0, gas).unwrap().exhaust(&inlet(), pa(101_325.0)).unwrap();
        let real = Nozzle::new(0.95, gas).unwrap().exhaust(&inlet(), pa(101_325.0)).unwrap();
        assert!(real.velocity < ideal.velocity);
        assert!(real.temperature > ideal.temperature);
    }

    #[test]
    fn adverse_pressure_ratio_is_infeasible() {
        let nozzle = Nozzle::new(0.97, GasProperties::air()).unwrap();
        let err = nozzle.exhaust(&inlet(), pa(350_000.0)).unwrap_err();
        assert!(err.is_infeasible());
        assert!(err.to_string().contains("P0=300000.0"));

        let err = nozzle.exhaust(&inlet(), pa(300_000.0)).unwrap_err();
        assert!(err.is_infeasible());
    }

    #[test]
    fn nozzle_invalid_efficiency() {
        assert!(Nozzle::new(-0.1, GasProperties::air()).unwrap_err().is_configuration());
    }
}
