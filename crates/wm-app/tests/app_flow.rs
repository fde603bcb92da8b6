use wm_app::{AppConfig, AppError, HeadlessMap, PositionState, WorkoutApp, WorkoutForm};
use wm_core::LatLng;
use wm_model::WorkoutKind;
use wm_storage::{DEFAULT_KEY, MemoryStore};

fn nyc() -> LatLng {
    LatLng::new(40.7, -74.0).unwrap()
}

fn running_form(distance: &str) -> WorkoutForm {
    WorkoutForm {
        kind: "running".to_string(),
        distance: distance.to_string(),
        duration: "25".to_string(),
        cadence: "178".to_string(),
        elevation: String::new(),
    }
}

#[test]
fn click_submit_and_jump_to_marker() {
    let mem = MemoryStore::new();
    let mut app: WorkoutApp<_, HeadlessMap> = WorkoutApp::new(mem.clone(), AppConfig::default());

    let placed = app.on_position(Ok(nyc()), |_| HeadlessMap::new()).unwrap();
    assert_eq!(placed, 0);
    assert_eq!(app.position(), &PositionState::Resolved(nyc()));
    assert_eq!(app.store().map().unwrap().view(), Some((nyc(), 13)));

    let spot = LatLng::new(40.75, -73.98).unwrap();
    app.handle_map_click(spot);
    assert!(app.form_open());

    let id = app.submit(&running_form("5")).unwrap();
    assert!(!app.form_open());
    assert!(mem.contains(DEFAULT_KEY));

    let workout = app.find(&id).unwrap();
    assert_eq!(workout.coords(), spot);
    assert_eq!(workout.kind(), WorkoutKind::Running);
    assert_eq!(workout.pace_min_per_km(), Some(5.0));

    assert!(app.handle_list_click(&id));
    assert_eq!(app.store().map().unwrap().view(), Some((spot, 13)));

    let summaries = app.summaries();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].id, id);
}

#[test]
fn invalid_form_keeps_form_open_and_state_untouched() {
    let mem = MemoryStore::new();
    let mut app: WorkoutApp<_, HeadlessMap> = WorkoutApp::new(mem.clone(), AppConfig::default());
    app.on_position(Ok(nyc()), |_| HeadlessMap::new()).unwrap();
    app.handle_map_click(nyc());

    let err = app.submit(&running_form("-2")).unwrap_err();
    assert!(matches!(err, AppError::InvalidMetric { what: "distance_km", .. }));
    assert!(app.form_open());
    assert!(app.store().is_empty());
    assert!(!mem.contains(DEFAULT_KEY));
}

#[test]
fn submit_without_click_is_rejected() {
    let mut app: WorkoutApp<_, HeadlessMap> =
        WorkoutApp::new(MemoryStore::new(), AppConfig::default());
    assert!(matches!(
        app.submit(&running_form("5")),
        Err(AppError::NoPendingLocation)
    ));
}

#[test]
fn position_failure_disables_map_but_keeps_workouts() {
    let mem = MemoryStore::new();
    {
        let mut first: WorkoutApp<_, HeadlessMap> =
            WorkoutApp::new(mem.clone(), AppConfig::default());
        first.on_position(Ok(nyc()), |_| HeadlessMap::new()).unwrap();
        first.handle_map_click(nyc());
        first.submit(&running_form("10")).unwrap();
    }

    let mut app: WorkoutApp<_, HeadlessMap> = WorkoutApp::new(mem, AppConfig::default());
    assert_eq!(app.store().len(), 1);

    let err = app
        .on_position(Err("permission denied".to_string()), |_| HeadlessMap::new())
        .unwrap_err();
    assert!(matches!(err, AppError::NoPosition { .. }));
    assert!(app.store().map().is_none());
    assert_eq!(app.summaries().len(), 1);

    app.handle_map_click(nyc());
    assert!(!app.form_open());

    let id = app.summaries()[0].id.clone();
    assert!(!app.handle_list_click(&id));

    // Terminal for the session.
    assert!(matches!(
        app.on_position(Ok(nyc()), |_| HeadlessMap::new()),
        Err(AppError::NoPosition { .. })
    ));

    assert!(app.remove(&id));
    assert!(app.store().is_empty());
}

#[test]
fn restored_workouts_are_pinned_once_position_resolves() {
    let mem = MemoryStore::new();
    {
        let mut first: WorkoutApp<_, HeadlessMap> =
            WorkoutApp::new(mem.clone(), AppConfig::default());
        first.on_position(Ok(nyc()), |_| HeadlessMap::new()).unwrap();
        for d in ["3", "6"] {
            first.handle_map_click(nyc());
            first.submit(&running_form(d)).unwrap();
        }
    }

    let mut app: WorkoutApp<_, HeadlessMap> = WorkoutApp::new(mem.clone(), AppConfig::default());
    assert_eq!(app.store().markers(), &[None, None]);
    assert_eq!(app.on_position(Ok(nyc()), |_| HeadlessMap::new()).unwrap(), 2);
    assert_eq!(app.store().map().unwrap().marker_count(), 2);

    app.remove_all();
    assert_eq!(app.store().map().unwrap().marker_count(), 0);
    assert!(!mem.contains(DEFAULT_KEY));
}

#[test]
fn configured_storage_key_is_used() {
    let mem = MemoryStore::new();
    let config = AppConfig {
        storage_key: "trail-log".to_string(),
        ..AppConfig::default()
    };
    let mut app: WorkoutApp<_, HeadlessMap> = WorkoutApp::new(mem.clone(), config);
    app.on_position(Ok(nyc()), |_| HeadlessMap::new()).unwrap();
    app.handle_map_click(nyc());
    app.submit(&running_form("4")).unwrap();

    assert!(mem.contains("trail-log"));
    assert!(!mem.contains(DEFAULT_KEY));
}
