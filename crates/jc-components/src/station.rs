//! Station numbering along the engine.

use std::fmt;

/// Engine stations, free stream to nozzle exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Station {
    FreeStream,
    DiffuserExit,
    CompressorExit,
    CombustorExit,
    TurbineExit,
    AfterburnerExit,
    NozzleExit,
}

impl Station {
    /// Conventional station label ("0", "02", ..., "e").
    pub fn label(self) -> &'static str {
        match self {
            Station::FreeStream => "0",
            Station::DiffuserExit => "02",
            Station::CompressorExit => "03",
            Station::CombustorExit => "04",
            Station::TurbineExit => "05",
            Station::AfterburnerExit => "06",
            Station::NozzleExit => "e",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Station::FreeStream => "free stream",
            Station::DiffuserExit => "compressor face",
            Station::CompressorExit => "compressor exit",
            Station::CombustorExit => "turbine inlet",
            Station::TurbineExit => "turbine exit",
            Station::AfterburnerExit => "afterburner exit",
            Station::NozzleExit => "nozzle exit",
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stations_sort_in_flow_order() {
        let mut stations = vec![
            Station::NozzleExit,
            Station::CompressorExit,
            Station::FreeStream,
            Station::TurbineExit,
        ];
        stations.sort();
        assert_eq!(
            stations,
            vec![
                Station::FreeStream,
                Station::CompressorExit,
                Station::TurbineExit,
                Station::NozzleExit
            ]
        );
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Station::CombustorExit.to_string(), "04");
    }
}
