//! wm-core: stable foundation for workmap.
//!
//! Contains:
//! - numeric (Real + tolerances + metric checks)
//! - ids (opaque workout identifiers)
//! - geo (latitude/longitude pairs)
//! - error (shared error types)

pub mod error;
pub mod geo;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use geo::LatLng;
pub use ids::WorkoutId;
pub use numeric::*;
