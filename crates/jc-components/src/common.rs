//! Common utilities for stage calculations.

use crate::error::{ComponentError, ComponentResult};
use jc_core::numeric::{ensure_positive, ensure_unit_fraction};
use jc_core::units::{Pressure, SpecEnergy, Temperature};
use jc_gas::{GasProperties, StagnationState};

/// Validate a stage efficiency, which must lie in (0, 1].
pub fn check_efficiency(stage: &'static str, eta: f64) -> ComponentResult<f64> {
    ensure_unit_fraction(eta, "efficiency must be in (0,1]")
        .map_err(|e| ComponentError::configuration(stage, e))
}

/// Validate a strictly positive construction parameter.
pub fn check_positive(stage: &'static str, value: f64, what: &'static str) -> ComponentResult<f64> {
    ensure_positive(value, what).map_err(|e| ComponentError::configuration(stage, e))
}

/// Build the outlet state of a stage, reporting non-positive results as infeasible.
pub fn outlet_state(
    stage: &'static str,
    p0: Pressure,
    t0: Temperature,
) -> ComponentResult<StagnationState> {
    StagnationState::from_pt(p0, t0).map_err(|_| ComponentError::Infeasible {
        stage,
        what: "outlet stagnation state is non-physical",
        detail: format!("P0={:.1} Pa, T0={:.2} K", p0.value, t0.value),
    })
}

/// Energy-balance denominator shared by the combustor and the afterburner:
/// `η·Qr/cp − T_target`.
///
/// A non-positive value means the fuel cannot reach the target temperature.
pub fn fuel_air_denominator(
    stage: &'static str,
    eta: f64,
    heating_value: SpecEnergy,
    target: Temperature,
    gas: &GasProperties,
) -> ComponentResult<f64> {
    let denom = eta * heating_value / gas.cp() - target.value;
    if denom > 0.0 && denom.is_finite() {
        Ok(denom)
    } else {
        Err(ComponentError::Infeasible {
            stage,
            what: "fuel heating value cannot reach target temperature",
            detail: format!(
                "eta*Qr/cp={:.2} K <= T_target={:.2} K (eta={}, Qr={} J/kg, cp={:.2} J/(kg K))",
                eta * heating_value / gas.cp(),
                target.value,
                eta,
                heating_value,
                gas.cp()
            ),
        })
    }
}
