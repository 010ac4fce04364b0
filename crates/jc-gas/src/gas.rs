//! Calorically perfect gas model.

use crate::error::{GasError, GasResult};
use jc_core::numeric::ensure_positive;
use jc_core::units::{Pressure, SpecHeat, Temperature};

/// Ratio of specific heats and specific gas constant of the working fluid.
///
/// cp is derived, never stored: `cp = γR/(γ−1)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasProperties {
    gamma: f64,
    r: SpecHeat,
}

impl GasProperties {
    /// Dry air, γ = 1.4, R = 287 J/(kg·K).
    pub const AIR: GasProperties = GasProperties {
        gamma: 1.4,
        r: 287.0,
    };

    /// Create a gas model.
    ///
    /// # Errors
    /// Returns error if γ ≤ 1 or R ≤ 0 (or either is not finite).
    pub fn new(gamma: f64, r: SpecHeat) -> GasResult<Self> {
        let gamma = ensure_positive(gamma, "ratio of specific heats")?;
        if gamma <= 1.0 {
            return Err(GasError::InvalidArg {
                what: "ratio of specific heats must exceed 1",
            });
        }
        let r = ensure_positive(r, "specific gas constant")?;
        Ok(Self { gamma, r })
    }

    pub fn air() -> Self {
        Self::AIR
    }

    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Specific gas constant [J/(kg·K)].
    pub fn r(&self) -> SpecHeat {
        self.r
    }

    /// Specific heat at constant pressure [J/(kg·K)].
    pub fn cp(&self) -> SpecHeat {
        self.gamma * self.r / (self.gamma - 1.0)
    }

    /// (γ−1)/γ, the exponent linking temperature ratio to pressure ratio
    /// along an isentrope: `T2/T1 = (P2/P1)^((γ−1)/γ)`.
    pub fn isentropic_exponent(&self) -> f64 {
        (self.gamma - 1.0) / self.gamma
    }

    /// Speed of sound [m/s] at static temperature `t`.
    pub fn speed_of_sound(&self, t: Temperature) -> f64 {
        (self.gamma * self.r * t.value).sqrt()
    }

    /// Ideal-gas specific entropy change [J/(kg·K)] from state 1 to state 2.
    pub fn entropy_change(
        &self,
        p1: Pressure,
        t1: Temperature,
        p2: Pressure,
        t2: Temperature,
    ) -> f64 {
        self.cp() * (t2.value / t1.value).ln() - self.r * (p2.value / p1.value).ln()
    }
}

impl Default for GasProperties {
    fn default() -> Self {
        Self::AIR
    }
}
