use chrono::{DateTime, Utc};

use crate::WorkoutKind;

/// Human-readable label for a workout, e.g. `"Running on March 5"`.
///
/// Dates are taken in UTC so the label is the same on every host.
pub fn describe(kind: WorkoutKind, created_at: DateTime<Utc>) -> String {
    format!("{} on {}", kind.label(), created_at.format("%B %-d"))
}
