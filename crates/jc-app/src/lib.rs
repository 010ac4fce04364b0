//! Shared application service layer for jetcycle.
//!
//! Frontends go through this crate for project management, compiling engine
//! definitions into solver configurations, cached cycle runs and sweeps.

pub mod error;
pub mod project_service;
pub mod run_service;
pub mod runtime_compile;
pub mod sweep_service;

pub use error::{AppError, AppResult};
pub use project_service::{
    EngineSummary, get_engine, list_engines, load_project, save_project, validate_project,
};
pub use run_service::{RunOptions, RunRequest, RunResponse, ensure_run, list_runs, load_run};
pub use runtime_compile::{StageSummary, build_engine, compile_engine, stage_chain};
pub use sweep_service::{SweepRequest, SweepRow, run_engine_sweep};
