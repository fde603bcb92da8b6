//! Error types for the wm-app service layer.

use std::path::PathBuf;

use wm_core::{CoreError, WorkoutId};
use wm_model::ModelError;
use wm_storage::StorageError;

use crate::map::MapError;

/// Application error type shared by every front end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid {what}: {input:?} (must be a non-negative finite number)")]
    InvalidMetric { what: &'static str, input: String },

    #[error("Invalid coordinate: {0}")]
    InvalidCoordinate(String),

    #[error("Could not get your position: {reason}")]
    NoPosition { reason: String },

    #[error("No map location selected for the new workout")]
    NoPendingLocation,

    #[error("Unknown workout type: {0}")]
    UnknownKind(String),

    #[error("Workout already recorded: {0}")]
    DuplicateId(WorkoutId),

    #[error("Map error: {0}")]
    Map(#[from] MapError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for wm-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidMetric { what, value } => AppError::InvalidMetric {
                what,
                input: value.to_string(),
            },
            other @ CoreError::InvalidCoordinate { .. } => {
                AppError::InvalidCoordinate(other.to_string())
            }
        }
    }
}

impl From<ModelError> for AppError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Core(core) => core.into(),
            ModelError::UnknownKind(kind) => AppError::UnknownKind(kind),
        }
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        AppError::Storage(err.to_string())
    }
}
