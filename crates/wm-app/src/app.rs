//! Event-driven application controller.
//!
//! The host (browser shell, CLI, test) feeds events in: the position lookup
//! finishing, map clicks, form submits, list clicks and removal requests.
//! Every handler runs to completion before the next event.

use wm_core::{LatLng, WorkoutId};
use wm_model::{Stamp, Workout, WorkoutDraft};
use wm_storage::{KeyValueStore, WorkoutRepository};

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::form::WorkoutForm;
use crate::map::MapView;
use crate::store::WorkoutStore;
use crate::summary::WorkoutSummary;

/// Where the position lookup stands.
#[derive(Debug, Clone, PartialEq)]
pub enum PositionState {
    Pending,
    Resolved(LatLng),
    /// Terminal for the session: no map, no markers.
    Unavailable { reason: String },
}

pub struct WorkoutApp<S, M> {
    store: WorkoutStore<S, M>,
    config: AppConfig,
    position: PositionState,
    pending_click: Option<LatLng>,
}

impl<S: KeyValueStore, M: MapView> WorkoutApp<S, M> {
    /// Restore persisted workouts. The map comes later, once the position
    /// lookup resolves.
    pub fn new(backend: S, config: AppConfig) -> Self {
        let repository = WorkoutRepository::with_key(backend, config.storage_key.clone());
        let store = WorkoutStore::initialize(repository, config.popup.clone());
        Self {
            store,
            config,
            position: PositionState::Pending,
            pending_click: None,
        }
    }

    /// Handle the outcome of the position lookup.
    ///
    /// On success `open_map` builds the map, which is centered on the position
    /// and receives a marker for every restored workout; the number of markers
    /// placed is returned. On failure the session continues without a map and
    /// `NoPosition` is returned for the host to show.
    pub fn on_position<F>(&mut self, outcome: Result<LatLng, String>, open_map: F) -> AppResult<usize>
    where
        F: FnOnce(LatLng) -> M,
    {
        match &self.position {
            PositionState::Pending => {}
            PositionState::Resolved(_) => {
                tracing::debug!("position already resolved, ignoring");
                return Ok(0);
            }
            PositionState::Unavailable { reason } => {
                return Err(AppError::NoPosition {
                    reason: reason.clone(),
                });
            }
        }

        match outcome {
            Ok(position) => {
                self.position = PositionState::Resolved(position);
                let mut map = open_map(position);
                map.set_view(position, self.config.map_zoom);
                self.store.attach_map(map)
            }
            Err(reason) => {
                tracing::warn!(%reason, "position unavailable, map disabled");
                self.position = PositionState::Unavailable {
                    reason: reason.clone(),
                };
                Err(AppError::NoPosition { reason })
            }
        }
    }

    /// A click on the map selects where the next workout goes and opens the
    /// form. Ignored while there is no map.
    pub fn handle_map_click(&mut self, at: LatLng) {
        if self.store.map().is_none() {
            return;
        }
        self.pending_click = Some(at);
    }

    pub fn form_open(&self) -> bool {
        self.pending_click.is_some()
    }

    pub fn pending_location(&self) -> Option<LatLng> {
        self.pending_click
    }

    /// Close the form without logging anything.
    pub fn cancel_form(&mut self) {
        self.pending_click = None;
    }

    /// Validate the form and log a workout at the clicked location.
    ///
    /// On any error nothing changes and the form stays open.
    pub fn submit(&mut self, form: &WorkoutForm) -> AppResult<WorkoutId> {
        let at = self.pending_click.ok_or(AppError::NoPendingLocation)?;
        let draft = form.parse(at)?;
        let id = self.log_workout(draft)?;
        self.pending_click = None;
        Ok(id)
    }

    /// Log a workout from an already validated draft.
    pub fn log_workout(&mut self, draft: WorkoutDraft) -> AppResult<WorkoutId> {
        let workout = Workout::from_draft(draft, Stamp::now())?;
        let id = workout.id().clone();
        self.store.add(workout)?;
        Ok(id)
    }

    /// A click on a list entry pans the map to its workout.
    pub fn handle_list_click(&mut self, id: &WorkoutId) -> bool {
        self.store.pan_to(id, self.config.map_zoom)
    }

    pub fn remove(&mut self, id: &WorkoutId) -> bool {
        self.store.remove_at(id)
    }

    pub fn remove_all(&mut self) {
        self.store.remove_all();
    }

    /// List entries in insertion order, oldest first.
    pub fn summaries(&self) -> Vec<WorkoutSummary> {
        self.store.records().iter().map(WorkoutSummary::from).collect()
    }

    pub fn find(&self, id: &WorkoutId) -> Option<&Workout> {
        self.store.find_by_id(id)
    }

    pub fn position(&self) -> &PositionState {
        &self.position
    }

    pub fn store(&self) -> &WorkoutStore<S, M> {
        &self.store
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
