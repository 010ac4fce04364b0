//! Diffuser (inlet) model.

use crate::common::{check_efficiency, outlet_state};
use crate::error::ComponentResult;
use crate::station::Station;
use crate::traits::Stage;
use jc_core::units::{k, pa};
use jc_gas::{AmbientState, GasProperties, StagnationState};
use tracing::warn;

/// Decelerates the free stream to the compressor face.
///
/// ## Model
///
/// ```text
/// M    = u / sqrt(γ R Ta)
/// T02  = Ta (1 + (γ−1)/2 M²)
/// T02s = Ta + η_d (T02 − Ta)
/// P02  = Pa (T02s/Ta)^(γ/(γ−1))
/// ```
///
/// The diffuser adds no energy, so the stagnation temperature is the ideal
/// value. Efficiency only reduces the recovered stagnation pressure.
#[derive(Clone, Debug)]
pub struct Diffuser {
    eta: f64,
    gas: GasProperties,
}

impl Diffuser {
    pub const NAME: &'static str = "diffuser";

    /// # Errors
    /// Returns a configuration error if `eta` is outside (0, 1].
    pub fn new(eta: f64, gas: GasProperties) -> ComponentResult<Self> {
        let eta = check_efficiency(Self::NAME, eta)?;
        Ok(Self { eta, gas })
    }

    /// Stagnation state at the compressor face.
    pub fn outlet(&self, ambient: &AmbientState) -> ComponentResult<StagnationState> {
        let gamma = self.gas.gamma();
        let p_a = ambient.pressure().value;
        let t_a = ambient.temperature().value;

        let mach = ambient.mach(&self.gas);
        if mach > 1.0 {
            warn!(
                mach,
                "supersonic free stream; normal-shock losses are not modelled by the diffuser"
            );
        }

        let t02 = t_a * (1.0 + 0.5 * (gamma - 1.0) * mach * mach);
        let t02s = t_a + self.eta * (t02 - t_a);
        let p02 = p_a * (t02s / t_a).powf(gamma / (gamma - 1.0));

        outlet_state(Self::NAME, pa(p02), k(t02))
    }
}

impl Stage for Diffuser {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn outlet_station(&self) -> Station {
        Station::DiffuserExit
    }

    fn efficiency(&self) -> f64 {
        self.eta
    }
}
