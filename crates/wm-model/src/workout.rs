//! Workout records.

use chrono::{DateTime, Utc};
use wm_core::{LatLng, WorkoutId, ensure_metric, finite_ratio};

use crate::{ModelResult, WorkoutKind, describe};

/// Identity assigned to a record when it is created.
#[derive(Debug, Clone, PartialEq)]
pub struct Stamp {
    pub id: WorkoutId,
    pub created_at: DateTime<Utc>,
}

impl Stamp {
    /// Fresh random id, current time.
    pub fn now() -> Self {
        Self {
            id: WorkoutId::generate(),
            created_at: Utc::now(),
        }
    }
}

/// Kind-specific input supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActivityInput {
    Running { cadence_spm: f64 },
    Cycling { elevation_gain_m: f64 },
}

impl ActivityInput {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            ActivityInput::Running { .. } => WorkoutKind::Running,
            ActivityInput::Cycling { .. } => WorkoutKind::Cycling,
        }
    }
}

/// Everything needed to build a workout apart from its stamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutDraft {
    pub coords: LatLng,
    pub distance_km: f64,
    pub duration_min: f64,
    pub activity: ActivityInput,
}

/// Kind-specific payload of a built workout, including the derived metric.
///
/// Derived metrics are `None` when the division has no finite result
/// (zero distance for pace, zero duration for speed).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Activity {
    Running {
        cadence_spm: f64,
        pace_min_per_km: Option<f64>,
    },
    Cycling {
        elevation_gain_m: f64,
        speed_km_per_h: Option<f64>,
    },
}

/// A logged workout. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    id: WorkoutId,
    created_at: DateTime<Utc>,
    coords: LatLng,
    distance_km: f64,
    duration_min: f64,
    description: String,
    activity: Activity,
}

impl Workout {
    /// Create a running workout stamped now.
    pub fn running(
        coords: LatLng,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
    ) -> ModelResult<Self> {
        Self::from_draft(
            WorkoutDraft {
                coords,
                distance_km,
                duration_min,
                activity: ActivityInput::Running { cadence_spm },
            },
            Stamp::now(),
        )
    }

    /// Create a cycling workout stamped now.
    pub fn cycling(
        coords: LatLng,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> ModelResult<Self> {
        Self::from_draft(
            WorkoutDraft {
                coords,
                distance_km,
                duration_min,
                activity: ActivityInput::Cycling { elevation_gain_m },
            },
            Stamp::now(),
        )
    }

    /// Validate `draft` and compute derived fields.
    ///
    /// Callers are expected to have validated already; the checks are
    /// repeated here so no invalid record can exist.
    pub fn from_draft(draft: WorkoutDraft, stamp: Stamp) -> ModelResult<Self> {
        let description = describe(draft.activity.kind(), stamp.created_at);
        Self::assemble(draft, stamp, description)
    }

    /// Like [`Workout::from_draft`] but keeps an existing description,
    /// used when rehydrating stored records.
    pub(crate) fn assemble(
        draft: WorkoutDraft,
        stamp: Stamp,
        description: String,
    ) -> ModelResult<Self> {
        let distance_km = ensure_metric(draft.distance_km, "distance_km")?;
        let duration_min = ensure_metric(draft.duration_min, "duration_min")?;

        let activity = match draft.activity {
            ActivityInput::Running { cadence_spm } => Activity::Running {
                cadence_spm: ensure_metric(cadence_spm, "cadence_spm")?,
                pace_min_per_km: finite_ratio(duration_min, distance_km),
            },
            ActivityInput::Cycling { elevation_gain_m } => Activity::Cycling {
                elevation_gain_m: ensure_metric(elevation_gain_m, "elevation_gain_m")?,
                speed_km_per_h: finite_ratio(distance_km, duration_min),
            },
        };

        Ok(Self {
            id: stamp.id,
            created_at: stamp.created_at,
            coords: draft.coords,
            distance_km,
            duration_min,
            description,
            activity,
        })
    }

    pub fn id(&self) -> &WorkoutId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn coords(&self) -> LatLng {
        self.coords
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn activity(&self) -> &Activity {
        &self.activity
    }

    pub fn kind(&self) -> WorkoutKind {
        match self.activity {
            Activity::Running { .. } => WorkoutKind::Running,
            Activity::Cycling { .. } => WorkoutKind::Cycling,
        }
    }

    /// Minutes per kilometre; running only.
    pub fn pace_min_per_km(&self) -> Option<f64> {
        match self.activity {
            Activity::Running {
                pace_min_per_km, ..
            } => pace_min_per_km,
            Activity::Cycling { .. } => None,
        }
    }

    /// Distance over duration; cycling only.
    pub fn speed_km_per_h(&self) -> Option<f64> {
        match self.activity {
            Activity::Cycling { speed_km_per_h, .. } => speed_km_per_h,
            Activity::Running { .. } => None,
        }
    }

    pub fn cadence_spm(&self) -> Option<f64> {
        match self.activity {
            Activity::Running { cadence_spm, .. } => Some(cadence_spm),
            Activity::Cycling { .. } => None,
        }
    }

    pub fn elevation_gain_m(&self) -> Option<f64> {
        match self.activity {
            Activity::Cycling {
                elevation_gain_m, ..
            } => Some(elevation_gain_m),
            Activity::Running { .. } => None,
        }
    }
}
