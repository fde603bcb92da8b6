use proptest::prelude::*;
use wm_core::LatLng;
use wm_model::{StoredWorkout, Workout, WorkoutKind};

fn coords() -> impl Strategy<Value = LatLng> {
    (-90.0_f64..=90.0, -180.0_f64..=180.0).prop_map(|(lat, lng)| LatLng { lat, lng })
}

proptest! {
    #[test]
    fn running_pace_is_duration_over_distance(
        at in coords(),
        distance in 0.01_f64..500.0,
        duration in 0.0_f64..2_000.0,
        cadence in 0.0_f64..300.0,
    ) {
        let w = Workout::running(at, distance, duration, cadence).unwrap();
        prop_assert_eq!(w.kind(), WorkoutKind::Running);
        prop_assert_eq!(w.pace_min_per_km(), Some(duration / distance));
    }

    #[test]
    fn cycling_speed_is_distance_over_duration(
        at in coords(),
        distance in 0.0_f64..500.0,
        duration in 0.01_f64..2_000.0,
        elevation in 0.0_f64..9_000.0,
    ) {
        let w = Workout::cycling(at, distance, duration, elevation).unwrap();
        prop_assert_eq!(w.kind(), WorkoutKind::Cycling);
        prop_assert_eq!(w.speed_km_per_h(), Some(distance / duration));
    }

    #[test]
    fn stored_form_rehydrates_to_equal_record(
        at in coords(),
        distance in 0.0_f64..500.0,
        duration in 0.0_f64..2_000.0,
        extra in 0.0_f64..1_000.0,
        running in any::<bool>(),
    ) {
        let w = if running {
            Workout::running(at, distance, duration, extra).unwrap()
        } else {
            Workout::cycling(at, distance, duration, extra).unwrap()
        };
        let json = serde_json::to_string(&StoredWorkout::from(&w)).unwrap();
        let back = Workout::try_from(serde_json::from_str::<StoredWorkout>(&json).unwrap()).unwrap();
        prop_assert_eq!(back, w);
    }
}
