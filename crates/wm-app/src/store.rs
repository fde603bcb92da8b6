//! Authoritative workout list.
//!
//! `records[i]` and `markers[i]` always describe the same workout. A marker
//! slot is `None` while no map is attached; every other mutation touches both
//! vectors together and then writes through to storage.

use wm_core::WorkoutId;
use wm_model::Workout;
use wm_storage::{KeyValueStore, WorkoutRepository};

use crate::config::PopupOptions;
use crate::error::{AppError, AppResult};
use crate::map::{MapError, MapView, MarkerHandle, MarkerSpec};

pub struct WorkoutStore<S, M> {
    records: Vec<Workout>,
    markers: Vec<Option<MarkerHandle>>,
    repository: WorkoutRepository<S>,
    map: Option<M>,
    popup: PopupOptions,
}

impl<S: KeyValueStore, M: MapView> WorkoutStore<S, M> {
    /// Load persisted workouts. Restored records have no marker until a map
    /// is attached.
    pub fn initialize(repository: WorkoutRepository<S>, popup: PopupOptions) -> Self {
        let report = repository.load_report();
        if report.skipped > 0 {
            // Keep stored indices aligned with memory for `remove_index`.
            repository.save(&report.workouts);
        }
        tracing::info!(
            key = repository.key(),
            restored = report.workouts.len(),
            skipped = report.skipped,
            "workout store initialized"
        );

        let markers = vec![None; report.workouts.len()];
        Self {
            records: report.workouts,
            markers,
            repository,
            map: None,
            popup,
        }
    }

    /// Attach the map and place a marker for every record lacking one, in
    /// list order. Returns the number of markers placed.
    ///
    /// A previously attached map is detached first and its markers removed,
    /// so every record is pinned again on the new map.
    ///
    /// If a placement fails, the records placed so far keep their markers and
    /// the rest stay unpinned.
    pub fn attach_map(&mut self, map: M) -> AppResult<usize> {
        if let Some(mut old) = self.map.take() {
            for handle in self.markers.iter_mut().filter_map(Option::take) {
                old.remove_marker(handle);
            }
            tracing::debug!("previous map detached");
        }
        let map = self.map.insert(map);
        let mut placed = 0;
        for (record, slot) in self.records.iter().zip(self.markers.iter_mut()) {
            if slot.is_some() {
                continue;
            }
            let handle = map.place_marker(&MarkerSpec::for_workout(record, &self.popup))?;
            *slot = Some(handle);
            placed += 1;
        }
        tracing::info!(placed, "map attached");
        Ok(placed)
    }

    pub fn map(&self) -> Option<&M> {
        self.map.as_ref()
    }

    pub fn map_mut(&mut self) -> Option<&mut M> {
        self.map.as_mut()
    }

    /// Add a workout, pinning it on the attached map if there is one.
    pub fn add(&mut self, workout: Workout) -> AppResult<()> {
        self.ensure_new(&workout)?;
        let handle = match self.map.as_mut() {
            Some(map) => Some(map.place_marker(&MarkerSpec::for_workout(&workout, &self.popup))?),
            None => None,
        };
        self.commit(workout, handle);
        Ok(())
    }

    /// Add a workout using a caller-supplied marker placement.
    ///
    /// `place` runs before anything is committed; if it fails the store and
    /// storage are left untouched.
    pub fn add_with<F>(&mut self, workout: Workout, place: F) -> AppResult<()>
    where
        F: FnOnce(&Workout) -> Result<Option<MarkerHandle>, MapError>,
    {
        self.ensure_new(&workout)?;
        let handle = place(&workout)?;
        self.commit(workout, handle);
        Ok(())
    }

    /// Remove the workout with `id`. Returns `false` if there is none.
    ///
    /// Removing the last workout deletes the storage slot.
    pub fn remove_at(&mut self, id: &WorkoutId) -> bool {
        let Some(index) = self.position(id) else {
            tracing::debug!(%id, "remove_at: unknown workout");
            return false;
        };

        if let (Some(handle), Some(map)) = (self.markers[index], self.map.as_mut()) {
            map.remove_marker(handle);
        }
        self.records.remove(index);
        self.markers.remove(index);
        if self.records.is_empty() {
            self.repository.clear();
        } else {
            self.repository.remove_index(index);
        }

        tracing::debug!(%id, index, remaining = self.records.len(), "workout removed");
        true
    }

    /// Remove every workout and marker and delete the storage slot.
    pub fn remove_all(&mut self) {
        if let Some(map) = self.map.as_mut() {
            for handle in self.markers.iter().flatten() {
                map.remove_marker(*handle);
            }
        }
        let removed = self.records.len();
        self.records.clear();
        self.markers.clear();
        self.repository.clear();
        tracing::debug!(removed, "all workouts removed");
    }

    pub fn find_by_id(&self, id: &WorkoutId) -> Option<&Workout> {
        self.records.iter().find(|w| w.id() == id)
    }

    pub fn position(&self, id: &WorkoutId) -> Option<usize> {
        self.records.iter().position(|w| w.id() == id)
    }

    /// Center the map on the workout with `id`. No-op without a map.
    pub fn pan_to(&mut self, id: &WorkoutId, zoom: u8) -> bool {
        let Some(coords) = self.find_by_id(id).map(Workout::coords) else {
            return false;
        };
        match self.map.as_mut() {
            Some(map) => {
                map.set_view(coords, zoom);
                true
            }
            None => false,
        }
    }

    pub fn records(&self) -> &[Workout] {
        &self.records
    }

    pub fn markers(&self) -> &[Option<MarkerHandle>] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn repository(&self) -> &WorkoutRepository<S> {
        &self.repository
    }

    fn ensure_new(&self, workout: &Workout) -> AppResult<()> {
        if self.position(workout.id()).is_some() {
            return Err(AppError::DuplicateId(workout.id().clone()));
        }
        Ok(())
    }

    fn commit(&mut self, workout: Workout, handle: Option<MarkerHandle>) {
        tracing::debug!(id = %workout.id(), kind = %workout.kind(), pinned = handle.is_some(), "workout added");
        self.records.push(workout);
        self.markers.push(handle);
        self.repository.save(&self.records);
    }
}
