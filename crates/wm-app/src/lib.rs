//! Workout tracking service layer.
//!
//! Owns the in-memory workout list and its map markers, keeps both in step
//! with storage, and exposes the event handlers a front end drives: position
//! resolved, map clicked, form submitted, list clicked, remove, remove all.

pub mod app;
pub mod config;
pub mod error;
pub mod form;
pub mod map;
pub mod store;
pub mod summary;

// Re-export key types for convenience
pub use app::{PositionState, WorkoutApp};
pub use config::{AppConfig, PopupOptions};
pub use error::{AppError, AppResult};
pub use form::{ExtraField, WorkoutForm};
pub use map::{HeadlessMap, MapError, MapView, MarkerHandle, MarkerSpec};
pub use store::WorkoutStore;
pub use summary::{SummaryRow, WorkoutSummary};
