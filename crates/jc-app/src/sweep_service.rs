//! Parameter sweeps over a project engine.

use jc_engine::{ErrorKind, SweepDefinition, SweepParameter, run_sweep};
use jc_project::schema::EngineDef;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::runtime_compile;

#[derive(Debug, Clone)]
pub struct SweepRequest {
    pub parameter: SweepParameter,
    pub start: f64,
    pub end: f64,
    pub points: usize,
}

/// Flattened sweep point. Infeasible points carry `error` instead of numbers.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SweepRow {
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thrust_n: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tsfc_kg_per_n_s: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_impulse_s: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_fuel_air_ratio: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SweepRow {
    pub fn is_feasible(&self) -> bool {
        self.error.is_none()
    }
}

pub fn run_engine_sweep(engine: &EngineDef, request: &SweepRequest) -> AppResult<Vec<SweepRow>> {
    let base = runtime_compile::compile_engine(engine)?;
    if request.parameter == SweepParameter::AfterburnerTemperature && base.afterburner.is_none() {
        return Err(AppError::InvalidInput(format!(
            "engine '{}' has no enabled afterburner to sweep",
            engine.id
        )));
    }

    let sweep = SweepDefinition::new(request.parameter, request.start, request.end, request.points)?;

    let rows = run_sweep(&base, &sweep)
        .into_iter()
        .map(|point| match point.outcome {
            Ok(result) => SweepRow {
                value: point.value,
                thrust_n: Some(result.performance.thrust.value),
                tsfc_kg_per_n_s: Some(result.performance.tsfc),
                specific_impulse_s: Some(result.performance.specific_impulse.value),
                total_fuel_air_ratio: Some(result.total_fuel_air_ratio),
                error: None,
            },
            Err(err) => {
                let label = match err.kind() {
                    ErrorKind::Configuration => "configuration",
                    ErrorKind::Infeasible => "infeasible",
                };
                SweepRow {
                    value: point.value,
                    thrust_n: None,
                    tsfc_kg_per_n_s: None,
                    specific_impulse_s: None,
                    total_fuel_air_ratio: None,
                    error: Some(format!("{label}: {err}")),
                }
            }
        })
        .collect();

    Ok(rows)
}
