//! Core trait for engine stages.

use crate::station::Station;

/// Capability shared by every stage in the chain.
///
/// The thermodynamic `outlet` of each stage takes stage-specific inputs (the
/// turbine needs compressor temperatures and the fuel-air ratio, the nozzle
/// needs ambient pressure), so it is an inherent method on each type. This
/// trait only exposes what the orchestrator needs to describe the chain.
pub trait Stage: Send + Sync {
    /// Stage name for diagnostics and error context.
    fn name(&self) -> &'static str;

    /// Station at which this stage delivers its outlet.
    fn outlet_station(&self) -> Station;

    /// Isentropic or process efficiency, in (0, 1].
    fn efficiency(&self) -> f64;
}
