//! Strongly-typed engine configuration.

use jc_core::units::{MassRate, SpecEnergy, Temperature};
use jc_gas::{AmbientState, GasProperties};

/// Per-stage efficiencies, each in (0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageEfficiencies {
    pub diffuser: f64,
    pub compressor: f64,
    pub combustor: f64,
    pub turbine: f64,
    pub nozzle: f64,
}

impl StageEfficiencies {
    /// η = 1 everywhere.
    pub fn ideal() -> Self {
        Self {
            diffuser: 1.0,
            compressor: 1.0,
            combustor: 1.0,
            turbine: 1.0,
            nozzle: 1.0,
        }
    }
}

/// Reheat stage settings. Present only when the afterburner is enabled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AfterburnerConfig {
    pub target_temperature: Temperature,
    pub heating_value: SpecEnergy,
    pub efficiency: f64,
}

/// Everything needed to build an [`Engine`](crate::Engine).
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub ambient: AmbientState,
    pub gas: GasProperties,
    pub pressure_ratio: f64,
    /// Combustor target, T04.
    pub turbine_inlet_temperature: Temperature,
    /// Primary fuel lower heating value [J/kg].
    pub fuel_heating_value: SpecEnergy,
    pub efficiencies: StageEfficiencies,
    pub air_mass_flow: MassRate,
    pub afterburner: Option<AfterburnerConfig>,
}
