//! Flattening a [`CycleResult`] into a serialisable [`CycleReport`].

use crate::types::{CycleReport, PerformanceRecord, StationRecord};
use jc_components::Station;
use jc_engine::{CycleResult, Engine};

impl CycleReport {
    /// Station table runs free stream → nozzle exit. Entropy is measured
    /// from the free-stream static state.
    pub fn from_cycle(engine_id: &str, engine: &Engine, result: &CycleResult) -> Self {
        let gas = engine.gas();
        let pa = result.ambient.pressure();
        let ta = result.ambient.temperature();

        let row = |station: Station, p: f64, t: f64, s: f64| StationRecord {
            station: station.label().to_string(),
            description: station.description().to_string(),
            p0_pa: p,
            t0_k: t,
            s_rel_j_per_kg_k: s,
        };

        let mut stations = Vec::with_capacity(result.stations.len() + 2);
        stations.push(row(Station::FreeStream, pa.value, ta.value, 0.0));

        for st in &result.stations {
            let p = st.state.pressure();
            let t = st.state.temperature();
            stations.push(row(
                st.station,
                p.value,
                t.value,
                gas.entropy_change(pa, ta, p, t),
            ));
        }

        let te = result.exhaust.temperature;
        stations.push(row(
            Station::NozzleExit,
            pa.value,
            te.value,
            gas.entropy_change(pa, ta, pa, te),
        ));

        let perf = &result.performance;
        Self {
            engine_id: engine_id.to_string(),
            stations,
            performance: PerformanceRecord {
                exhaust_velocity_m_s: result.exhaust.velocity.value,
                fuel_air_ratio: result.fuel_air_ratio,
                afterburner_fuel_air_ratio: result.afterburner_fuel_air_ratio,
                total_fuel_air_ratio: result.total_fuel_air_ratio,
                fuel_mass_flow_kg_s: perf.fuel_mass_flow.value,
                thrust_n: perf.thrust.value,
                specific_thrust_n_s_per_kg: perf.specific_thrust(engine.air_mass_flow()),
                tsfc_kg_per_n_s: perf.tsfc,
                specific_impulse_s: perf.specific_impulse.value,
            },
        }
    }

    pub fn station(&self, label: &str) -> Option<&StationRecord> {
        self.stations.iter().find(|s| s.station == label)
    }
}
