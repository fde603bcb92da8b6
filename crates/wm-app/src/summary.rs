//! List-entry view of a workout.

use core::fmt;

use wm_core::WorkoutId;
use wm_model::{Workout, WorkoutKind};

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

/// Everything a list entry shows for one workout.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutSummary {
    pub id: WorkoutId,
    pub kind: WorkoutKind,
    pub title: String,
    pub rows: Vec<SummaryRow>,
}

fn row(icon: &'static str, value: String, unit: &'static str) -> SummaryRow {
    SummaryRow { icon, value, unit }
}

fn one_decimal(v: Option<f64>) -> String {
    v.map(|v| format!("{v:.1}")).unwrap_or_else(|| "-".to_string())
}

fn plain(v: Option<f64>) -> String {
    v.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

impl From<&Workout> for WorkoutSummary {
    fn from(w: &Workout) -> Self {
        let kind_icon = match w.kind() {
            WorkoutKind::Running => "🏃‍♂️",
            WorkoutKind::Cycling => "🚴‍♀️",
        };
        let mut rows = vec![
            row(kind_icon, w.distance_km().to_string(), "km"),
            row("⏱", w.duration_min().to_string(), "min"),
        ];
        match w.kind() {
            WorkoutKind::Running => {
                rows.push(row("⚡️", one_decimal(w.pace_min_per_km()), "min/km"));
                rows.push(row("🦶🏼", plain(w.cadence_spm()), "spm"));
            }
            WorkoutKind::Cycling => {
                rows.push(row("⚡️", one_decimal(w.speed_km_per_h()), "km/h"));
                rows.push(row("⛰", plain(w.elevation_gain_m()), "m"));
            }
        }
        Self {
            id: w.id().clone(),
            kind: w.kind(),
            title: w.description().to_string(),
            rows,
        }
    }
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.id)?;
        for r in &self.rows {
            write!(f, "\n  {} {} {}", r.icon, r.value, r.unit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wm_core::LatLng;

    #[test]
    fn running_rows() {
        let w = Workout::running(LatLng::new(0.0, 0.0).unwrap(), 5.0, 23.0, 178.0).unwrap();
        let s = WorkoutSummary::from(&w);
        let values: Vec<_> = s.rows.iter().map(|r| (r.value.as_str(), r.unit)).collect();
        assert_eq!(
            values,
            vec![("5", "km"), ("23", "min"), ("4.6", "min/km"), ("178", "spm")]
        );
        assert_eq!(s.kind, WorkoutKind::Running);
    }

    #[test]
    fn cycling_rows_and_display() {
        let w = Workout::cycling(LatLng::new(0.0, 0.0).unwrap(), 27.5, 0.0, 523.0).unwrap();
        let s = WorkoutSummary::from(&w);
        assert_eq!(s.rows[2].value, "-");
        assert_eq!(s.rows[2].unit, "km/h");
        assert_eq!(s.rows[3].value, "523");

        let text = s.to_string();
        assert!(text.starts_with("Cycling on "));
        assert!(text.contains("27.5 km"));
    }
}
