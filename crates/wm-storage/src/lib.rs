//! wm-storage: durable key-value slots and the workout persistence adapter.

pub mod backend;
pub mod repository;

pub use backend::{FileStore, KeyValueStore, MemoryStore, validate_key};
pub use repository::{DEFAULT_KEY, LoadReport, WorkoutRepository};

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid storage key: {key:?}")]
    InvalidKey { key: String },

    #[error("Storage backend error: {message}")]
    Backend { message: String },
}
