//! Steady-state turbojet cycle orchestration.
//!
//! An [`Engine`] is built once from an [`EngineConfig`] into a fixed chain
//! (diffuser → compressor → combustor → turbine → optional afterburner →
//! nozzle). [`Engine::solve`] pulls each stage outlet in chain order, threads
//! the compressor temperatures and fuel-air ratio into the turbine, and
//! aggregates the exhaust into thrust, TSFC and specific impulse.
//!
//! Solving is a pure function of the configuration: repeated calls return
//! identical results, and separate engines may be solved on separate threads
//! (see [`sweep`]).

pub mod config;
pub mod engine;
pub mod error;
pub mod performance;
pub mod result;
pub mod sweep;

pub use config::{AfterburnerConfig, EngineConfig, StageEfficiencies};
pub use engine::{AfterburnerStage, Engine};
pub use error::{EngineError, EngineResult, ErrorKind};
pub use performance::Performance;
pub use result::{CycleResult, StationState};
pub use sweep::{SweepDefinition, SweepParameter, SweepPoint, run_sweep};
