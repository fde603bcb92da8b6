//! Persisted record schema.
//!
//! One [`StoredWorkout`] per element of the stored JSON array. The `kind`
//! field selects the variant; derived metrics and the description are written
//! out alongside the raw inputs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use wm_core::{LatLng, WorkoutId, nearly_equal};

use crate::workout::{Activity, ActivityInput, Stamp, Workout, WorkoutDraft};
use crate::{ModelError, WorkoutKind, describe};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredWorkout {
    pub id: WorkoutId,
    pub created_at: DateTime<Utc>,
    pub coords: LatLng,
    pub distance_km: f64,
    pub duration_min: f64,
    #[serde(default)]
    pub description: String,
    #[serde(flatten)]
    pub detail: StoredDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StoredDetail {
    Running {
        cadence_spm: f64,
        #[serde(default)]
        pace_min_per_km: Option<f64>,
    },
    Cycling {
        elevation_gain_m: f64,
        #[serde(default)]
        speed_km_per_h: Option<f64>,
    },
}

impl StoredDetail {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            StoredDetail::Running { .. } => WorkoutKind::Running,
            StoredDetail::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

impl From<&Workout> for StoredWorkout {
    fn from(w: &Workout) -> Self {
        let detail = match *w.activity() {
            Activity::Running {
                cadence_spm,
                pace_min_per_km,
            } => StoredDetail::Running {
                cadence_spm,
                pace_min_per_km,
            },
            Activity::Cycling {
                elevation_gain_m,
                speed_km_per_h,
            } => StoredDetail::Cycling {
                elevation_gain_m,
                speed_km_per_h,
            },
        };
        Self {
            id: w.id().clone(),
            created_at: w.created_at(),
            coords: w.coords(),
            distance_km: w.distance_km(),
            duration_min: w.duration_min(),
            description: w.description().to_string(),
            detail,
        }
    }
}

impl TryFrom<StoredWorkout> for Workout {
    type Error = ModelError;

    /// Rehydrate a stored record into the variant named by its `kind`.
    ///
    /// Inputs are re-validated and derived metrics recomputed; a missing
    /// description is derived again from kind and date.
    fn try_from(stored: StoredWorkout) -> Result<Self, Self::Error> {
        let kind = stored.detail.kind();
        let (activity, stored_metric) = match stored.detail {
            StoredDetail::Running {
                cadence_spm,
                pace_min_per_km,
            } => (ActivityInput::Running { cadence_spm }, pace_min_per_km),
            StoredDetail::Cycling {
                elevation_gain_m,
                speed_km_per_h,
            } => (ActivityInput::Cycling { elevation_gain_m }, speed_km_per_h),
        };

        let description = if stored.description.trim().is_empty() {
            describe(kind, stored.created_at)
        } else {
            stored.description.trim().to_string()
        };

        let workout = Workout::assemble(
            WorkoutDraft {
                coords: stored.coords,
                distance_km: stored.distance_km,
                duration_min: stored.duration_min,
                activity,
            },
            Stamp {
                id: stored.id,
                created_at: stored.created_at,
            },
            description,
        )?;

        let recomputed = workout.pace_min_per_km().or(workout.speed_km_per_h());
        if let (Some(old), Some(new)) = (stored_metric, recomputed)
            && !nearly_equal(old, new, Default::default())
        {
            tracing::debug!(
                id = %workout.id(),
                stored = old,
                recomputed = new,
                "stored derived metric differs, using recomputed value"
            );
        }

        Ok(workout)
    }
}
