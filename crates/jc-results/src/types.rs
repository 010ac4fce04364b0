//! Result data types.

use serde::{Deserialize, Serialize};

pub type RunId = String;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunManifest {
    pub run_id: RunId,
    pub engine_id: String,
    /// RFC 3339 creation time.
    pub timestamp: String,
    pub solver_version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StationRecord {
    /// Station label ("0", "02", ..., "e").
    pub station: String,
    pub description: String,
    /// Total pressure, or static pressure for the free stream and nozzle exit.
    pub p0_pa: f64,
    /// Total temperature, or static temperature for the free stream and nozzle exit.
    pub t0_k: f64,
    /// Ideal-gas specific entropy relative to the free stream.
    pub s_rel_j_per_kg_k: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PerformanceRecord {
    pub exhaust_velocity_m_s: f64,
    pub fuel_air_ratio: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub afterburner_fuel_air_ratio: Option<f64>,
    pub total_fuel_air_ratio: f64,
    pub fuel_mass_flow_kg_s: f64,
    pub thrust_n: f64,
    pub specific_thrust_n_s_per_kg: f64,
    pub tsfc_kg_per_n_s: f64,
    pub specific_impulse_s: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CycleReport {
    pub engine_id: String,
    pub stations: Vec<StationRecord>,
    pub performance: PerformanceRecord,
}
