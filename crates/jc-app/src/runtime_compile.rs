//! Compilation of an [`EngineDef`] into an executable [`Engine`].

use jc_core::units::{k, kgps, mps, pa};
use jc_engine::{AfterburnerConfig, Engine, EngineConfig, StageEfficiencies};
use jc_gas::{AmbientState, GasProperties};
use jc_project::schema::EngineDef;

use crate::error::{AppError, AppResult};

/// One entry of the stage chain, for display.
#[derive(Debug, Clone, PartialEq)]
pub struct StageSummary {
    pub name: &'static str,
    pub outlet_station: &'static str,
    pub efficiency: f64,
}

fn require(engine: &EngineDef, field: &str, value: Option<f64>) -> AppResult<f64> {
    value.ok_or_else(|| {
        AppError::Compile(format!("engine '{}' is missing {}", engine.id, field))
    })
}

/// Turn a definition into a strongly-typed configuration.
///
/// A disabled afterburner compiles to no afterburner whatever fields it carries.
pub fn compile_engine(engine: &EngineDef) -> AppResult<EngineConfig> {
    let gas = GasProperties::new(engine.gas.gamma, engine.gas.r_j_per_kg_k)?;

    let ambient = AmbientState::new(
        pa(require(engine, "ambient_pressure_pa", engine.ambient_pressure_pa)?),
        k(require(engine, "ambient_temperature_k", engine.ambient_temperature_k)?),
        mps(require(engine, "flight_velocity_m_s", engine.flight_velocity_m_s)?),
    )?;

    let efficiencies = StageEfficiencies {
        diffuser: require(engine, "diffuser_efficiency", engine.diffuser_efficiency)?,
        compressor: require(engine, "compressor_efficiency", engine.compressor_efficiency)?,
        combustor: require(engine, "combustor_efficiency", engine.combustor_efficiency)?,
        turbine: require(engine, "turbine_efficiency", engine.turbine_efficiency)?,
        nozzle: require(engine, "nozzle_efficiency", engine.nozzle_efficiency)?,
    };

    let afterburner = match &engine.afterburner {
        Some(ab) if ab.enabled => Some(AfterburnerConfig {
            target_temperature: k(require(
                engine,
                "afterburner.target_temperature_k",
                ab.target_temperature_k,
            )?),
            heating_value: require(
                engine,
                "afterburner.fuel_heating_value_j_per_kg",
                ab.fuel_heating_value_j_per_kg,
            )?,
            efficiency: require(engine, "afterburner.efficiency", ab.efficiency)?,
        }),
        _ => None,
    };

    Ok(EngineConfig {
        ambient,
        gas,
        pressure_ratio: require(engine, "pressure_ratio", engine.pressure_ratio)?,
        turbine_inlet_temperature: k(require(
            engine,
            "turbine_inlet_temperature_k",
            engine.turbine_inlet_temperature_k,
        )?),
        fuel_heating_value: require(
            engine,
            "fuel_heating_value_j_per_kg",
            engine.fuel_heating_value_j_per_kg,
        )?,
        efficiencies,
        air_mass_flow: kgps(require(engine, "air_mass_flow_kg_s", engine.air_mass_flow_kg_s)?),
        afterburner,
    })
}

pub fn build_engine(engine: &EngineDef) -> AppResult<Engine> {
    let config = compile_engine(engine)?;
    Ok(Engine::new(&config)?)
}

/// Stages of the built engine in flow order.
pub fn stage_chain(engine: &EngineDef) -> AppResult<Vec<StageSummary>> {
    let engine = build_engine(engine)?;
    Ok(engine
        .stages()
        .iter()
        .map(|stage| StageSummary {
            name: stage.name(),
            outlet_station: stage.outlet_station().label(),
            efficiency: stage.efficiency(),
        })
        .collect())
}
