//! Run execution and caching service.

use jc_results::{CycleReport, RunManifest, RunStore, compute_run_id, timestamp_now};
use std::path::Path;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::project_service;
use crate::runtime_compile;

/// Options for running a cycle.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub use_cache: bool,
    pub solver_version: String,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            use_cache: true,
            solver_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Request to execute a run.
pub struct RunRequest<'a> {
    pub project_path: &'a Path,
    pub engine_id: &'a str,
    pub options: RunOptions,
}

/// Response from a run execution.
#[derive(Debug, Clone)]
pub struct RunResponse {
    pub run_id: String,
    pub manifest: RunManifest,
    pub report: CycleReport,
    pub loaded_from_cache: bool,
}

/// Solve the requested engine, or load an identical earlier run.
pub fn ensure_run(request: &RunRequest) -> AppResult<RunResponse> {
    let project = project_service::load_project(request.project_path)?;
    project_service::validate_project(&project)?;
    let engine_def = project_service::get_engine(&project, request.engine_id)?;

    let run_id = compute_run_id(engine_def, &request.options.solver_version);
    let store = RunStore::for_project(request.project_path)?;

    if request.options.use_cache && store.has_run(&run_id) {
        info!(run_id = %run_id, engine = request.engine_id, "loaded cached run");
        let manifest = store.load_manifest(&run_id)?;
        let report = store.load_report(&run_id)?;
        return Ok(RunResponse {
            run_id,
            manifest,
            report,
            loaded_from_cache: true,
        });
    }

    let engine = runtime_compile::build_engine(engine_def)?;
    let result = engine.solve()?;
    let report = CycleReport::from_cycle(&engine_def.id, &engine, &result);

    let manifest = RunManifest {
        run_id: run_id.clone(),
        engine_id: engine_def.id.clone(),
        timestamp: timestamp_now(),
        solver_version: request.options.solver_version.clone(),
    };
    store.save_run(&manifest, &report)?;
    info!(run_id = %run_id, engine = request.engine_id, "saved run");

    Ok(RunResponse {
        run_id,
        manifest,
        report,
        loaded_from_cache: false,
    })
}

/// Runs stored for an engine, most recent first.
pub fn list_runs(project_path: &Path, engine_id: &str) -> AppResult<Vec<RunManifest>> {
    let store = RunStore::for_project(project_path)?;

    let mut runs = store.list_runs(engine_id)?;
    runs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    Ok(runs)
}

/// Load a specific run.
pub fn load_run(project_path: &Path, run_id: &str) -> AppResult<(RunManifest, CycleReport)> {
    let store = RunStore::for_project(project_path)?;
    if !store.has_run(run_id) {
        return Err(AppError::Results(format!("Run not found: {}", run_id)));
    }

    let manifest = store.load_manifest(run_id)?;
    let report = store.load_report(run_id)?;
    Ok((manifest, report))
}
