//! Gas model and state errors.

use jc_core::JcError;
use thiserror::Error;

/// Result type for gas and state operations.
pub type GasResult<T> = Result<T, GasError>;

/// Errors raised while building gas models or station states.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GasError {
    /// Non-physical values (non-positive pressure, temperature, etc.).
    #[error("Non-physical value for {what}: {value}")]
    NonPhysical { what: &'static str, value: f64 },

    /// Invalid gas model argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

impl From<JcError> for GasError {
    fn from(err: JcError) -> Self {
        match err {
            JcError::NonFinite { what, value } | JcError::NonPositive { what, value } => {
                GasError::NonPhysical { what, value }
            }
            JcError::InvalidArg { what } => GasError::InvalidArg { what },
        }
    }
}
