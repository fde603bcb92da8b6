//! Workout persistence adapter.
//!
//! All records live as one JSON array in a single slot. Read failures and
//! corrupt data are absorbed here: callers only ever see "some workouts" or
//! "no workouts".

use serde_json::Value;
use wm_model::{StoredWorkout, Workout};

use crate::{KeyValueStore, StorageError, StorageResult};

/// Slot name used unless configured otherwise.
pub const DEFAULT_KEY: &str = "workouts";

/// Outcome of reading the slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub workouts: Vec<Workout>,
    /// Array elements that could not be rehydrated and were dropped.
    pub skipped: usize,
    /// The slot held something that was not a JSON array.
    pub corrupt: bool,
}

#[derive(Clone, Debug)]
pub struct WorkoutRepository<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> WorkoutRepository<S> {
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, DEFAULT_KEY)
    }

    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Serialize `workouts` into the slot, overwriting it.
    pub fn try_save(&self, workouts: &[Workout]) -> StorageResult<()> {
        let stored: Vec<StoredWorkout> = workouts.iter().map(StoredWorkout::from).collect();
        let json = serde_json::to_string(&stored)?;
        self.backend.set(&self.key, &json)
    }

    /// Like [`WorkoutRepository::try_save`], logging instead of failing.
    pub fn save(&self, workouts: &[Workout]) {
        match self.try_save(workouts) {
            Ok(()) => tracing::debug!(key = %self.key, count = workouts.len(), "saved workouts"),
            Err(err) => tracing::warn!(key = %self.key, error = %err, "failed to save workouts"),
        }
    }

    /// Read back every workout; absent or corrupt data yields an empty list.
    pub fn load(&self) -> Vec<Workout> {
        self.load_report().workouts
    }

    pub fn load_report(&self) -> LoadReport {
        let Some(raw) = self.read_array() else {
            return LoadReport {
                corrupt: self.slot_present(),
                ..LoadReport::default()
            };
        };

        let mut report = LoadReport::default();
        for (index, value) in raw.into_iter().enumerate() {
            let parsed = serde_json::from_value::<StoredWorkout>(value)
                .map_err(|e| e.to_string())
                .and_then(|stored| Workout::try_from(stored).map_err(|e| e.to_string()));
            match parsed {
                Ok(workout) => report.workouts.push(workout),
                Err(reason) => {
                    tracing::warn!(key = %self.key, index, %reason, "skipping stored workout");
                    report.skipped += 1;
                }
            }
        }
        report
    }

    /// Delete the slot outright.
    pub fn clear(&self) {
        if let Err(err) = self.backend.remove(&self.key) {
            tracing::warn!(key = %self.key, error = %err, "failed to clear workouts");
        }
    }

    /// Remove element `index` from the stored array and write it back.
    ///
    /// No-op when the slot is absent, unreadable, or `index` is out of range.
    pub fn remove_index(&self, index: usize) {
        let Some(mut raw) = self.read_array() else {
            return;
        };
        if index >= raw.len() {
            tracing::debug!(key = %self.key, index, len = raw.len(), "remove_index out of range");
            return;
        }
        raw.remove(index);

        let written = serde_json::to_string(&raw)
            .map_err(StorageError::from)
            .and_then(|json| self.backend.set(&self.key, &json));
        if let Err(err) = written {
            tracing::warn!(key = %self.key, index, error = %err, "failed to remove stored workout");
        }
    }

    fn slot_present(&self) -> bool {
        matches!(self.backend.get(&self.key), Ok(Some(_)))
    }

    fn read_array(&self) -> Option<Vec<Value>> {
        let text = match self.backend.get(&self.key) {
            Ok(Some(text)) => text,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "failed to read workouts");
                return None;
            }
        };
        match serde_json::from_str::<Vec<Value>>(&text) {
            Ok(values) => Some(values),
            Err(err) => {
                tracing::warn!(key = %self.key, error = %err, "stored workouts are not a JSON array");
                None
            }
        }
    }
}
