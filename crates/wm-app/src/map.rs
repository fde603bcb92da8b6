//! Map collaborator contract.
//!
//! The store never draws anything itself. It asks a [`MapView`] to place and
//! remove markers and to re-center, and keeps the handles it gets back.

use std::collections::BTreeMap;

use wm_core::LatLng;
use wm_model::Workout;

use crate::config::PopupOptions;

/// Opaque handle to a placed marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkerHandle(pub u64);

#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum MapError {
    #[error("Marker placement failed: {0}")]
    Placement(String),
}

/// What a marker should look like.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub coords: LatLng,
    /// Popup text: the workout description.
    pub label: String,
    /// Popup style class, `"running-popup"` or `"cycling-popup"`.
    pub popup_class: String,
    pub popup: PopupOptions,
}

impl MarkerSpec {
    pub fn for_workout(workout: &Workout, popup: &PopupOptions) -> Self {
        Self {
            coords: workout.coords(),
            label: workout.description().to_string(),
            popup_class: format!("{}-popup", workout.kind()),
            popup: popup.clone(),
        }
    }
}

/// Capabilities the application needs from an interactive map.
pub trait MapView {
    /// Center the map on `center` at `zoom`.
    fn set_view(&mut self, center: LatLng, zoom: u8);

    /// Place a labeled marker and return a handle that can remove it later.
    fn place_marker(&mut self, spec: &MarkerSpec) -> Result<MarkerHandle, MapError>;

    /// Remove a previously placed marker. Unknown handles are ignored.
    fn remove_marker(&mut self, handle: MarkerHandle);
}

/// A map with no display: keeps markers and view in memory.
///
/// Used by the command-line front end and by tests.
#[derive(Debug, Default)]
pub struct HeadlessMap {
    view: Option<(LatLng, u8)>,
    markers: BTreeMap<MarkerHandle, MarkerSpec>,
    next_handle: u64,
}

impl HeadlessMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> Option<(LatLng, u8)> {
        self.view
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn marker(&self, handle: MarkerHandle) -> Option<&MarkerSpec> {
        self.markers.get(&handle)
    }
}

impl MapView for HeadlessMap {
    fn set_view(&mut self, center: LatLng, zoom: u8) {
        tracing::debug!(%center, zoom, "map view set");
        self.view = Some((center, zoom));
    }

    fn place_marker(&mut self, spec: &MarkerSpec) -> Result<MarkerHandle, MapError> {
        self.next_handle += 1;
        let handle = MarkerHandle(self.next_handle);
        tracing::debug!(handle = handle.0, label = %spec.label, "marker placed");
        self.markers.insert(handle, spec.clone());
        Ok(handle)
    }

    fn remove_marker(&mut self, handle: MarkerHandle) {
        if self.markers.remove(&handle).is_some() {
            tracing::debug!(handle = handle.0, "marker removed");
        }
    }
}
