use proptest::prelude::*;
use wm_app::{HeadlessMap, PopupOptions, WorkoutStore};
use wm_core::{LatLng, WorkoutId};
use wm_model::Workout;
use wm_storage::{MemoryStore, WorkoutRepository};

#[derive(Debug, Clone)]
enum Op {
    AddRunning(f64, f64),
    AddCycling(f64, f64),
    RemoveNth(usize),
    RemoveUnknown,
    RemoveAll,
    AttachMap,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0.1_f64..50.0, 1.0_f64..300.0).prop_map(|(d, t)| Op::AddRunning(d, t)),
        4 => (0.1_f64..200.0, 1.0_f64..600.0).prop_map(|(d, t)| Op::AddCycling(d, t)),
        3 => (0_usize..8).prop_map(Op::RemoveNth),
        1 => Just(Op::RemoveUnknown),
        1 => Just(Op::RemoveAll),
        1 => Just(Op::AttachMap),
    ]
}

proptest! {
    #[test]
    fn records_markers_and_storage_stay_aligned(ops in prop::collection::vec(op(), 0..40)) {
        let mem = MemoryStore::new();
        let mut store: WorkoutStore<MemoryStore, HeadlessMap> =
            WorkoutStore::initialize(WorkoutRepository::new(mem.clone()), PopupOptions::default());
        let at = LatLng::new(47.37, 8.54).unwrap();

        for op in ops {
            match op {
                Op::AddRunning(d, t) => store.add(Workout::running(at, d, t, 170.0).unwrap()).unwrap(),
                Op::AddCycling(d, t) => store.add(Workout::cycling(at, d, t, 100.0).unwrap()).unwrap(),
                Op::RemoveNth(n) => {
                    if let Some(id) = store.records().get(n).map(|w| w.id().clone()) {
                        prop_assert!(store.remove_at(&id));
                    }
                }
                Op::RemoveUnknown => prop_assert!(!store.remove_at(&WorkoutId::from("unknown"))),
                Op::RemoveAll => store.remove_all(),
                Op::AttachMap => {
                    if store.map().is_none() {
                        store.attach_map(HeadlessMap::new()).unwrap();
                    }
                }
            }

            prop_assert_eq!(store.records().len(), store.markers().len());
            if let Some(map) = store.map() {
                prop_assert!(store.markers().iter().all(Option::is_some));
                prop_assert_eq!(map.marker_count(), store.len());
            }
            let persisted = WorkoutRepository::new(mem.clone()).load();
            prop_assert_eq!(persisted.as_slice(), store.records());
        }
    }
}
