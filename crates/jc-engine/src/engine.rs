//! Fixed-topology turbojet and its solve sequence.

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::performance::Performance;
use crate::result::{CycleResult, StationState};
use jc_components::{
    Afterburner, Combustor, Compressor, Diffuser, Nozzle, Stage, Station, Turbine, TurbineDuty,
};
use jc_core::units::MassRate;
use jc_gas::{AmbientState, GasProperties, StagnationState};
use tracing::{debug, info};

/// Whether the chain includes a reheat stage.
///
/// Decided once when the engine is built; without it the nozzle is fed
/// directly by the turbine.
#[derive(Clone, Debug)]
pub enum AfterburnerStage {
    Without,
    With(Afterburner),
}

/// Single-spool turbojet built from an [`EngineConfig`].
#[derive(Clone, Debug)]
pub struct Engine {
    ambient: AmbientState,
    gas: GasProperties,
    air_mass_flow: MassRate,
    diffuser: Diffuser,
    compressor: Compressor,
    combustor: Combustor,
    turbine: Turbine,
    afterburner: AfterburnerStage,
    nozzle: Nozzle,
}

impl Engine {
    /// Build the stage chain.
    ///
    /// # Errors
    /// Any stage configuration error, an infeasible fuel/target combination
    /// in either burner, or a non-positive air mass flow.
    pub fn new(config: &EngineConfig) -> EngineResult<Self> {
        let gas = config.gas;
        let eff = &config.efficiencies;

        let mdot = config.air_mass_flow.value;
        if !(mdot.is_finite() && mdot > 0.0) {
            return Err(EngineError::Configuration {
                what: "air mass flow must be positive and finite",
            });
        }

        let diffuser = Diffuser::new(eff.diffuser, gas)?;
        let compressor = Compressor::new(config.pressure_ratio, eff.compressor, gas)?;
        let combustor = Combustor::new(
            config.turbine_inlet_temperature,
            config.fuel_heating_value,
            eff.combustor,
            gas,
        )?;
        let turbine = Turbine::new(eff.turbine, gas)?;
        let afterburner = match &config.afterburner {
            Some(ab) => AfterburnerStage::With(Afterburner::new(
                ab.target_temperature,
                ab.heating_value,
                ab.efficiency,
                gas,
            )?),
            None => AfterburnerStage::Without,
        };
        let nozzle = Nozzle::new(eff.nozzle, gas)?;

        Ok(Self {
            ambient: config.ambient,
            gas,
            air_mass_flow: config.air_mass_flow,
            diffuser,
            compressor,
            combustor,
            turbine,
            afterburner,
            nozzle,
        })
    }

    pub fn ambient(&self) -> &AmbientState {
        &self.ambient
    }

    pub fn gas(&self) -> &GasProperties {
        &self.gas
    }

    pub fn air_mass_flow(&self) -> MassRate {
        self.air_mass_flow
    }

    pub fn has_afterburner(&self) -> bool {
        matches!(self.afterburner, AfterburnerStage::With(_))
    }

    /// Stages in flow order.
    pub fn stages(&self) -> Vec<&dyn Stage> {
        let mut stages: Vec<&dyn Stage> = Vec::with_capacity(6);
        stages.push(&self.diffuser);
        stages.push(&self.compressor);
        stages.push(&self.combustor);
        stages.push(&self.turbine);
        if let AfterburnerStage::With(ab) = &self.afterburner {
            stages.push(ab);
        }
        stages.push(&self.nozzle);
        stages
    }

    /// Solve the cycle.
    ///
    /// Each stage is evaluated once, in chain order. The turbine receives T02,
    /// T03 and f explicitly from the earlier stages.
    pub fn solve(&self) -> EngineResult<CycleResult> {
        let mut stations = Vec::with_capacity(5);

        let s02 = self.diffuser.outlet(&self.ambient)?;
        record(&mut stations, Station::DiffuserExit, s02);

        let s03 = self.compressor.outlet(&s02)?;
        record(&mut stations, Station::CompressorExit, s03);

        let burner = self.combustor.outlet(&s03)?;
        record(&mut stations, Station::CombustorExit, burner.state);

        let duty = TurbineDuty {
            compressor_inlet: s02.temperature(),
            compressor_outlet: s03.temperature(),
            fuel_air_ratio: burner.fuel_air_ratio,
        };
        let s05 = self.turbine.outlet(&burner.state, &duty)?;
        record(&mut stations, Station::TurbineExit, s05);

        let (nozzle_inlet, afterburner_fuel_air_ratio, total_fuel_air_ratio) =
            match &self.afterburner {
                AfterburnerStage::Without => (s05, None, burner.fuel_air_ratio),
                AfterburnerStage::With(ab) => {
                    let reheat = ab.outlet(&s05, burner.fuel_air_ratio)?;
                    record(&mut stations, Station::AfterburnerExit, reheat.state);
                    (
                        reheat.state,
                        Some(reheat.fuel_air_ratio),
                        reheat.total_fuel_air_ratio,
                    )
                }
            };

        let exhaust = self
            .nozzle
            .exhaust(&nozzle_inlet, self.ambient.pressure())?;
        debug!(
            ue_mps = exhaust.velocity.value,
            te_k = exhaust.temperature.value,
            "nozzle exit"
        );

        let performance = Performance::evaluate(
            self.air_mass_flow,
            self.ambient.velocity().value,
            &exhaust,
            total_fuel_air_ratio,
        )?;
        info!(
            thrust_n = performance.thrust.value,
            tsfc = performance.tsfc,
            isp_s = performance.specific_impulse.value,
            f_total = total_fuel_air_ratio,
            "cycle solved"
        );

        Ok(CycleResult {
            ambient: self.ambient,
            stations,
            exhaust,
            fuel_air_ratio: burner.fuel_air_ratio,
            afterburner_fuel_air_ratio,
            total_fuel_air_ratio,
            performance,
        })
    }
}

fn record(stations: &mut Vec<StationState>, station: Station, state: StagnationState) {
    debug!(
        station = station.label(),
        p0_pa = state.pressure().value,
        t0_k = state.temperature().value,
        "stage outlet"
    );
    stations.push(StationState { station, state });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AfterburnerConfig, StageEfficiencies};
    use crate::error::ErrorKind;
    use jc_core::units::{k, kgps, mps, pa};

    fn config() -> EngineConfig {
        EngineConfig {
            ambient: AmbientState::new(pa(101_325.0), k(288.0), mps(250.0)).unwrap(),
            gas: GasProperties::air(),
            pressure_ratio: 8.3,
            turbine_inlet_temperature: k(1250.0),
            fuel_heating_value: 43e6,
            efficiencies: StageEfficiencies {
                diffuser: 0.95,
                compressor: 0.82,
                combustor: 0.98,
                turbine: 0.88,
                nozzle: 0.97,
            },
            air_mass_flow: kgps(20.0),
            afterburner: None,
        }
    }

    #[test]
    fn stage_order_without_afterburner() {
        let engine = Engine::new(&config()).unwrap();
        let names: Vec<_> = engine.stages().iter().map(|s| s.name()).collect();
        assert_eq!(
            names,
            vec!["diffuser", "compressor", "combustor", "turbine", "nozzle"]
        );
        assert!(!engine.has_afterburner());
    }

    #[test]
    fn stage_order_with_afterburner() {
        let mut cfg = config();
        cfg.afterburner = Some(AfterburnerConfig {
            target_temperature: k(2000.0),
            heating_value: 43e6,
            efficiency: 0.95,
        });
        let engine = Engine::new(&cfg).unwrap();
        let stations: Vec<_> = engine.stages().iter().map(|s| s.outlet_station()).collect();
        assert_eq!(stations[4], Station::AfterburnerExit);
        assert_eq!(stations[5], Station::NozzleExit);
        assert!(engine.has_afterburner());
    }

    #[test]
    fn rejects_non_positive_mass_flow() {
        let mut cfg = config();
        cfg.air_mass_flow = kgps(0.0);
        let err = Engine::new(&cfg).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn rejects_bad_efficiency_before_solving() {
        let mut cfg = config();
        cfg.efficiencies.turbine = 0.0;
        let err = Engine::new(&cfg).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(err.stage(), Some("turbine"));
    }

    #[test]
    fn stations_follow_flow_order() {
        let result = Engine::new(&config()).unwrap().solve().unwrap();
        let labels: Vec<_> = result.stations.iter().map(|s| s.station.label()).collect();
        assert_eq!(labels, vec!["02", "03", "04", "05"]);
        assert_eq!(
            result.nozzle_inlet(),
            result.station(Station::TurbineExit)
        );
    }
}
