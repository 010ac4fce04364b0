//! Compressor model.

use crate::common::{check_efficiency, check_positive, outlet_state};
use crate::error::ComponentResult;
use crate::station::Station;
use crate::traits::Stage;
use jc_core::units::{Pressure, k};
use jc_gas::{GasProperties, StagnationState};

/// Axial or centrifugal compressor with a fixed pressure ratio.
///
/// ## Model
///
/// ```text
/// P03  = π P02
/// T03s = T02 π^((γ−1)/γ)
/// T03  = T02 + (T03s − T02)/η_c
/// ```
#[derive(Clone, Debug)]
pub struct Compressor {
    pressure_ratio: f64,
    eta: f64,
    gas: GasProperties,
}

impl Compressor {
    pub const NAME: &'static str = "compressor";

    /// # Errors
    /// Returns a configuration error if `pressure_ratio ≤ 0` or `eta` is
    /// outside (0, 1].
    pub fn new(pressure_ratio: f64, eta: f64, gas: GasProperties) -> ComponentResult<Self> {
        let pressure_ratio = check_positive(Self::NAME, pressure_ratio, "pressure ratio")?;
        let eta = check_efficiency(Self::NAME, eta)?;
        Ok(Self {
            pressure_ratio,
            eta,
            gas,
        })
    }

    pub fn outlet(&self, inlet: &StagnationState) -> ComponentResult<StagnationState> {
        let p02 = inlet.pressure();
        let t02 = inlet.temperature().value;

        let p03: Pressure = p02 * self.pressure_ratio;

        let t03s = t02 * self.pressure_ratio.powf(self.gas.isentropic_exponent());
        let t03 = t02 + (t03s - t02) / self.eta;

        outlet_state(Self::NAME, p03, k(t03))
    }
}

impl Stage for Compressor {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn outlet_station(&self) -> Station {
        Station::CompressorExit
    }

    fn efficiency(&self) -> f64 {
        self.eta
    }
}
