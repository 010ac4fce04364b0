//! Cycle solution types.

use crate::performance::Performance;
use jc_components::{NozzleExit, Station};
use jc_gas::{AmbientState, StagnationState};

/// Stagnation state delivered at one station.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationState {
    pub station: Station,
    pub state: StagnationState,
}

/// Complete solution of one `solve()` call. Never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct CycleResult {
    pub ambient: AmbientState,
    /// Stations 02 through 05 (06 with afterburner), in flow order.
    pub stations: Vec<StationState>,
    pub exhaust: NozzleExit,
    /// Primary combustor fuel-air ratio.
    pub fuel_air_ratio: f64,
    /// Incremental afterburner fuel-air ratio, if the afterburner is fitted.
    pub afterburner_fuel_air_ratio: Option<f64>,
    /// Sum of primary and afterburner fuel-air ratios.
    pub total_fuel_air_ratio: f64,
    pub performance: Performance,
}

impl CycleResult {
    pub fn station(&self, station: Station) -> Option<&StagnationState> {
        self.stations
            .iter()
            .find(|s| s.station == station)
            .map(|s| &s.state)
    }

    /// State entering the nozzle (turbine or afterburner exit).
    pub fn nozzle_inlet(&self) -> Option<&StagnationState> {
        self.stations.last().map(|s| &s.state)
    }
}
