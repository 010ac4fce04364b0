//! Error types for the jc-app service layer.

use jc_engine::{EngineError, ErrorKind};
use std::path::PathBuf;

/// Application error wrapping the backend crates' errors by message.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Project error: {0}")]
    Project(String),

    #[error("Failed to read project file: {path}")]
    ProjectFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write project file: {path}")]
    ProjectFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Project validation failed: {0}")]
    Validation(String),

    #[error("Engine not found: {0}")]
    EngineNotFound(String),

    #[error("Engine compilation failed: {0}")]
    Compile(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Infeasible cycle: {0}")]
    Infeasible(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for jc-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<jc_project::ProjectError> for AppError {
    fn from(err: jc_project::ProjectError) -> Self {
        AppError::Project(err.to_string())
    }
}

impl From<jc_project::ValidationError> for AppError {
    fn from(err: jc_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        match err.kind() {
            ErrorKind::Configuration => AppError::Configuration(err.to_string()),
            ErrorKind::Infeasible => AppError::Infeasible(err.to_string()),
        }
    }
}

impl From<jc_gas::GasError> for AppError {
    fn from(err: jc_gas::GasError) -> Self {
        AppError::Compile(err.to_string())
    }
}

impl From<jc_results::ResultsError> for AppError {
    fn from(err: jc_results::ResultsError) -> Self {
        AppError::Results(err.to_string())
    }
}
