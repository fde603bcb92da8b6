//! New-workout form boundary.
//!
//! Raw strings come in, a validated [`WorkoutDraft`] comes out. Nothing past
//! this point ever sees unparsed input.

use wm_core::{LatLng, ensure_metric};
use wm_model::{ActivityInput, WorkoutDraft, WorkoutKind};

use crate::error::{AppError, AppResult};

/// Which kind-specific input row is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtraField {
    Cadence,
    Elevation,
}

impl ExtraField {
    pub fn for_kind(kind: WorkoutKind) -> Self {
        match kind {
            WorkoutKind::Running => ExtraField::Cadence,
            WorkoutKind::Cycling => ExtraField::Elevation,
        }
    }
}

/// Form contents as typed by the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutForm {
    pub kind: String,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

impl WorkoutForm {
    pub fn kind(&self) -> AppResult<WorkoutKind> {
        self.kind
            .parse()
            .map_err(|_| AppError::UnknownKind(self.kind.clone()))
    }

    /// Input row to show for the currently selected kind.
    pub fn extra_field(&self) -> AppResult<ExtraField> {
        self.kind().map(ExtraField::for_kind)
    }

    /// Parse and validate every field relevant to the selected kind.
    pub fn parse(&self, coords: LatLng) -> AppResult<WorkoutDraft> {
        let kind = self.kind()?;
        let distance_km = parse_metric(&self.distance, "distance_km")?;
        let duration_min = parse_metric(&self.duration, "duration_min")?;
        let activity = match kind {
            WorkoutKind::Running => ActivityInput::Running {
                cadence_spm: parse_metric(&self.cadence, "cadence_spm")?,
            },
            WorkoutKind::Cycling => ActivityInput::Cycling {
                elevation_gain_m: parse_metric(&self.elevation, "elevation_gain_m")?,
            },
        };
        Ok(WorkoutDraft {
            coords,
            distance_km,
            duration_min,
            activity,
        })
    }

    /// Blank every numeric field, keeping the selected kind.
    pub fn clear(&mut self) {
        self.distance.clear();
        self.duration.clear();
        self.cadence.clear();
        self.elevation.clear();
    }
}

/// A number that is present, finite and not negative.
pub fn parse_metric(raw: &str, what: &'static str) -> AppResult<f64> {
    let invalid = || AppError::InvalidMetric {
        what,
        input: raw.to_string(),
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid());
    }
    let value: f64 = trimmed.parse().map_err(|_| invalid())?;
    ensure_metric(value, what).map_err(|_| invalid())
}
