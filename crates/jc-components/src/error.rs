//! Error types for stage calculations.

use jc_core::JcError;
use thiserror::Error;

/// Errors that can occur while building or evaluating a stage.
///
/// `Configuration` is raised at construction for non-physical parameters.
/// `Infeasible` is raised when a physically impossible intermediate result
/// appears; it names the stage and carries the offending quantities.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComponentError {
    #[error("Configuration error in {stage}: {what}")]
    Configuration {
        stage: &'static str,
        what: &'static str,
    },

    #[error("Infeasible cycle at {stage}: {what} ({detail})")]
    Infeasible {
        stage: &'static str,
        what: &'static str,
        detail: String,
    },
}

pub type ComponentResult<T> = Result<T, ComponentError>;

impl ComponentError {
    /// Name of the stage that raised the error.
    pub fn stage(&self) -> &'static str {
        match self {
            ComponentError::Configuration { stage, .. } => stage,
            ComponentError::Infeasible { stage, .. } => stage,
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, ComponentError::Configuration { .. })
    }

    pub fn is_infeasible(&self) -> bool {
        matches!(self, ComponentError::Infeasible { .. })
    }

    /// Attach a stage name to a core validation failure.
    pub(crate) fn configuration(stage: &'static str, err: JcError) -> Self {
        let what = match err {
            JcError::NonFinite { what, .. }
            | JcError::NonPositive { what, .. }
            | JcError::InvalidArg { what } => what,
        };
        ComponentError::Configuration { stage, what }
    }
}
