//! wm-model: workout records and their persisted schema.

pub mod description;
pub mod kind;
pub mod record;
pub mod workout;

pub use description::describe;
pub use kind::WorkoutKind;
pub use record::{StoredDetail, StoredWorkout};
pub use workout::{Activity, ActivityInput, Stamp, Workout, WorkoutDraft};

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error(transparent)]
    Core(#[from] wm_core::CoreError),

    #[error("Unknown workout kind: {0}")]
    UnknownKind(String),
}

impl ModelError {
    /// True when the failure is a rejected numeric input.
    pub fn is_invalid_metric(&self) -> bool {
        matches!(
            self,
            ModelError::Core(wm_core::CoreError::InvalidMetric { .. })
        )
    }
}
