//! Parametric sweeps over one engine input.
//!
//! Every point builds and solves its own [`Engine`], so points are independent
//! and are evaluated in parallel. Infeasible points are kept as errors in the
//! output rather than aborting the sweep.

use crate::config::EngineConfig;
use crate::engine::Engine;
use crate::error::{EngineError, EngineResult};
use crate::result::CycleResult;
use jc_core::units::{k, kgps, mps};
use jc_gas::AmbientState;
use rayon::prelude::*;
use std::fmt;
use std::str::FromStr;

/// Engine input varied by a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepParameter {
    PressureRatio,
    TurbineInletTemperature,
    FlightVelocity,
    AirMassFlow,
    AfterburnerTemperature,
}

impl SweepParameter {
    pub const ALL: [SweepParameter; 5] = [
        SweepParameter::PressureRatio,
        SweepParameter::TurbineInletTemperature,
        SweepParameter::FlightVelocity,
        SweepParameter::AirMassFlow,
        SweepParameter::AfterburnerTemperature,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SweepParameter::PressureRatio => "pressure-ratio",
            SweepParameter::TurbineInletTemperature => "turbine-inlet-temperature",
            SweepParameter::FlightVelocity => "flight-velocity",
            SweepParameter::AirMassFlow => "air-mass-flow",
            SweepParameter::AfterburnerTemperature => "afterburner-temperature",
        }
    }

    /// SI unit of the swept value, for display.
    pub fn unit(self) -> &'static str {
        match self {
            SweepParameter::PressureRatio => "-",
            SweepParameter::TurbineInletTemperature | SweepParameter::AfterburnerTemperature => {
                "K"
            }
            SweepParameter::FlightVelocity => "m/s",
            SweepParameter::AirMassFlow => "kg/s",
        }
    }

    /// Copy of `base` with this parameter set to `value`.
    pub fn apply(self, base: &EngineConfig, value: f64) -> EngineResult<EngineConfig> {
        let mut config = base.clone();
        match self {
            SweepParameter::PressureRatio => config.pressure_ratio = value,
            SweepParameter::TurbineInletTemperature => {
                config.turbine_inlet_temperature = k(value)
            }
            SweepParameter::FlightVelocity => {
                let ambient = &base.ambient;
                config.ambient =
                    AmbientState::new(ambient.pressure(), ambient.temperature(), mps(value))?;
            }
            SweepParameter::AirMassFlow => config.air_mass_flow = kgps(value),
            SweepParameter::AfterburnerTemperature => match config.afterburner.as_mut() {
                Some(ab) => ab.target_temperature = k(value),
                None => {
                    return Err(EngineError::Configuration {
                        what: "afterburner temperature sweep requires an afterburner",
                    });
                }
            },
        }
        Ok(config)
    }
}

impl fmt::Display for SweepParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SweepParameter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SweepParameter::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<_> = SweepParameter::ALL.iter().map(|p| p.as_str()).collect();
                format!("unknown sweep parameter '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

/// Linearly spaced sweep of one parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepDefinition {
    parameter: SweepParameter,
    start: f64,
    end: f64,
    num_points: usize,
}

impl SweepDefinition {
    pub fn new(
        parameter: SweepParameter,
        start: f64,
        end: f64,
        num_points: usize,
    ) -> EngineResult<Self> {
        if num_points < 2 {
            return Err(EngineError::Configuration {
                what: "sweep must have at least 2 points",
            });
        }
        if !start.is_finite() || !end.is_finite() {
            return Err(EngineError::Configuration {
                what: "sweep bounds must be finite",
            });
        }
        if (start - end).abs() < 1e-12 {
            return Err(EngineError::Configuration {
                what: "sweep start and end values must be different",
            });
        }
        Ok(Self {
            parameter,
            start,
            end,
            num_points,
        })
    }

    pub fn parameter(&self) -> SweepParameter {
        self.parameter
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<f64> {
        let n = self.num_points;
        if n < 2 {
            return vec![self.start; n];
        }
        let step = (self.end - self.start) / (n - 1) as f64;
        (0..n)
            .map(|i| {
                if i == n - 1 {
                    self.end
                } else {
                    self.start + step * i as f64
                }
            })
            .collect()
    }
}

/// One evaluated sweep point.
#[derive(Debug, Clone)]
pub struct SweepPoint {
    pub value: f64,
    pub outcome: EngineResult<CycleResult>,
}

impl SweepPoint {
    pub fn is_feasible(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Evaluate `sweep` around `base`, in parallel, preserving point order.
pub fn run_sweep(base: &EngineConfig, sweep: &SweepDefinition) -> Vec<SweepPoint> {
    sweep
        .generate_points()
        .into_par_iter()
        .map(|value| {
            let outcome = sweep
                .parameter
                .apply(base, value)
                .and_then(|config| Engine::new(&config))
                .and_then(|engine| engine.solve());
            SweepPoint { value, outcome }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_points_hit_both_ends() {
        let sweep = SweepDefinition::new(SweepParameter::PressureRatio, 4.0, 12.0, 5).unwrap();
        assert_eq!(sweep.generate_points(), vec![4.0, 6.0, 8.0, 10.0, 12.0]);
    }

    #[test]
    fn descending_sweep() {
        let sweep = SweepDefinition::new(SweepParameter::AirMassFlow, 30.0, 10.0, 3).unwrap();
        assert_eq!(sweep.generate_points(), vec![30.0, 20.0, 10.0]);
    }

    #[test]
    fn invalid_definitions() {
        assert!(SweepDefinition::new(SweepParameter::PressureRatio, 4.0, 12.0, 1).is_err());
        assert!(SweepDefinition::new(SweepParameter::PressureRatio, 4.0, 4.0, 5).is_err());
        assert!(SweepDefinition::new(SweepParameter::PressureRatio, f64::NAN, 4.0, 5).is_err());
    }

    #[test]
    fn degenerate_point_counts_do_not_underflow() {
        let mut sweep = SweepDefinition::new(SweepParameter::PressureRatio, 4.0, 12.0, 2).unwrap();
        sweep.num_points = 0;
        assert!(sweep.generate_points().is_empty());
        sweep.num_points = 1;
        assert_eq!(sweep.generate_points(), vec![4.0]);
    }

    #[test]
    fn accessors_expose_definition() {
        let sweep = SweepDefinition::new(SweepParameter::FlightVelocity, 0.0, 300.0, 4).unwrap();
        assert_eq!(sweep.parameter(), SweepParameter::FlightVelocity);
        assert_eq!((sweep.start(), sweep.end(), sweep.num_points()), (0.0, 300.0, 4));
    }

    #[test]
    fn parameter_names_round_trip() {
        for p in SweepParameter::ALL {
            assert_eq!(p.as_str().parse::<SweepParameter>().unwrap(), p);
        }
        assert!("bypass-ratio".parse::<SweepParameter>().is_err());
    }
}
