//! Error types for engine construction and solving.

use jc_components::ComponentError;
use jc_gas::GasError;
use thiserror::Error;

/// Broad classification of engine failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Non-physical or missing parameters, detected before solving.
    Configuration,
    /// Physically impossible intermediate result, detected while solving.
    Infeasible,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error(transparent)]
    Component(#[from] ComponentError),

    #[error("Invalid gas or ambient state: {0}")]
    Gas(#[from] GasError),

    #[error("Configuration error: {what}")]
    Configuration { what: &'static str },

    #[error("Infeasible cycle at performance: {what} ({detail})")]
    Infeasible { what: &'static str, detail: String },
}

pub type EngineResult<T> = Result<T, EngineError>;

impl EngineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::Component(ComponentError::Configuration { .. }) => {
                ErrorKind::Configuration
            }
            EngineError::Component(ComponentError::Infeasible { .. }) => ErrorKind::Infeasible,
            EngineError::Gas(_) | EngineError::Configuration { .. } => ErrorKind::Configuration,
            EngineError::Infeasible { .. } => ErrorKind::Infeasible,
        }
    }

    /// Stage that raised the error, if it came from a stage.
    pub fn stage(&self) -> Option<&'static str> {
        match self {
            EngineError::Component(err) => Some(err.stage()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_errors_keep_their_kind() {
        let err: EngineError = ComponentError::Infeasible {
            stage: "nozzle",
            what: "x",
            detail: String::new(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::Infeasible);
        assert_eq!(err.stage(), Some("nozzle"));

        let err: EngineError = ComponentError::Configuration {
            stage: "turbine",
            what: "efficiency must be in (0,1]",
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }

    #[test]
    fn gas_errors_are_configuration() {
        let err: EngineError = GasError::InvalidArg { what: "gamma" }.into();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert_eq!(err.stage(), None);
    }
}
