//! Overall cycle performance from the nozzle exhaust.

use crate::error::{EngineError, EngineResult};
use jc_components::NozzleExit;
use jc_core::units::constants::G0_MPS2;
use jc_core::units::{Force, MassRate, Time, kgps, newton, s};

/// Installed-independent performance metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Performance {
    pub fuel_mass_flow: MassRate,
    pub thrust: Force,
    /// Thrust-specific fuel consumption [kg/(N·s)].
    pub tsfc: f64,
    pub specific_impulse: Time,
}

impl Performance {
    /// ```text
    /// mdot_f = f_total mdot_air
    /// F      = mdot_air [(1 + f_total) ue − u0]
    /// TSFC   = mdot_f / F
    /// Isp    = F / (mdot_f g0)
    /// ```
    ///
    /// # Errors
    /// Infeasible when net thrust or fuel flow is not positive, since TSFC and
    /// Isp would not be finite.
    pub fn evaluate(
        air_mass_flow: MassRate,
        flight_velocity: f64,
        exhaust: &NozzleExit,
        total_fuel_air_ratio: f64,
    ) -> EngineResult<Self> {
        let mdot_air = air_mass_flow.value;
        let ue = exhaust.velocity.value;

        let mdot_f = total_fuel_air_ratio * mdot_air;
        let thrust = mdot_air * ((1.0 + total_fuel_air_ratio) * ue - flight_velocity);

        if !(thrust > 0.0) {
            return Err(EngineError::Infeasible {
                what: "engine produces no net thrust",
                detail: format!(
                    "F={:.3} N, ue={:.2} m/s, u0={:.2} m/s",
                    thrust, ue, flight_velocity
                ),
            });
        }
        if !(mdot_f > 0.0) {
            return Err(EngineError::Infeasible {
                what: "no fuel flow",
                detail: format!("f_total={total_fuel_air_ratio}, mdot_air={mdot_air} kg/s"),
            });
        }

        let tsfc = mdot_f / thrust;
        let isp = thrust / (mdot_f * G0_MPS2);

        Ok(Self {
            fuel_mass_flow: kgps(mdot_f),
            thrust: newton(thrust),
            tsfc,
            specific_impulse: s(isp),
        })
    }

    /// Thrust per unit air mass flow [N·s/kg].
    pub fn specific_thrust(&self, air_mass_flow: MassRate) -> f64 {
        self.thrust.value / air_mass_flow.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jc_core::units::{k, mps};
    use jc_core::{Tolerances, nearly_equal};

    fn exhaust(ue: f64) -> NozzleExit {
        NozzleExit {
            velocity: mps(ue),
            temperature: k(650.0),
        }
    }

    #[test]
    fn performance_definitions() {
        let perf = Performance::evaluate(kgps(20.0), 250.0, &exhaust(740.0), 0.015).unwrap();
        let tol = Tolerances::default();

        let thrust = 20.0 * (1.015 * 740.0 - 250.0);
        assert!(nearly_equal(perf.thrust.value, thrust, tol));
        assert!(nearly_equal(perf.fuel_mass_flow.value, 0.3, tol));
        assert!(nearly_equal(perf.tsfc, 0.3 / thrust, tol));
        assert!(nearly_equal(
            perf.specific_impulse.value,
            thrust / (0.3 * 9.81),
            tol
        ));
        assert!(nearly_equal(perf.specific_thrust(kgps(20.0)), thrust / 20.0, tol));
    }

    #[test]
    fn drag_producing_cycle_is_infeasible() {
        let err = Performance::evaluate(kgps(20.0), 800.0, &exhaust(500.0), 0.015).unwrap_err();
        assert!(matches!(err, EngineError::Infeasible { .. }));
    }

    #[test]
    fn zero_fuel_is_infeasible() {
        let err = Performance::evaluate(kgps(20.0), 0.0, &exhaust(300.0), 0.0).unwrap_err();
        assert!(err.to_string().contains("no fuel flow"));
    }
}
