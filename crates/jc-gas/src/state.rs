//! Free-stream and stagnation state definitions.

use crate::error::{GasError, GasResult};
use crate::gas::GasProperties;
use jc_core::numeric::{ensure_finite, ensure_positive};
use jc_core::units::{Pressure, Temperature, Velocity};

/// Free-stream static conditions seen by the engine inlet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmbientState {
    p: Pressure,
    t: Temperature,
    u: Velocity,
}

impl AmbientState {
    /// Validates that static pressure and temperature are positive and finite
    /// and the flight velocity is finite and non-negative.
    pub fn new(p: Pressure, t: Temperature, u: Velocity) -> GasResult<Self> {
        ensure_positive(p.value, "ambient static pressure")?;
        ensure_positive(t.value, "ambient static temperature")?;
        let u_val = ensure_finite(u.value, "flight velocity")?;
        if u_val < 0.0 {
            return Err(GasError::NonPhysical {
                what: "flight velocity",
                value: u_val,
            });
        }
        Ok(Self { p, t, u })
    }

    /// Static pressure.
    pub fn pressure(&self) -> Pressure {
        self.p
    }

    /// Static temperature.
    pub fn temperature(&self) -> Temperature {
        self.t
    }

    /// Flight (free-stream) velocity.
    pub fn velocity(&self) -> Velocity {
        self.u
    }

    /// Free-stream Mach number.
    pub fn mach(&self, gas: &GasProperties) -> f64 {
        self.u.value / gas.speed_of_sound(self.t)
    }
}

/// Stagnation pressure and temperature at a station boundary.
///
/// Always positive and finite; produced once per stage per solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StagnationState {
    p0: Pressure,
    t0: Temperature,
}

impl StagnationState {
    /// Create a state from stagnation pressure and temperature.
    ///
    /// Validates that both are positive and finite.
    pub fn from_pt(p0: Pressure, t0: Temperature) -> GasResult<Self> {
        ensure_positive(p0.value, "stagnation pressure")?;
        ensure_positive(t0.value, "stagnation temperature")?;
        Ok(Self { p0, t0 })
    }

    /// Stagnation pressure.
    pub fn pressure(&self) -> Pressure {
        self.p0
    }

    /// Stagnation temperature.
    pub fn temperature(&self) -> Temperature {
        self.t0
    }
}
