//! Geographic coordinates.

use core::fmt;

use crate::{CoreError, CoreResult};

/// A latitude/longitude pair in decimal degrees.
///
/// Serialized as a two-element `[lat, lng]` array. Deserializing applies the
/// same range check as [`LatLng::new`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[f64; 2]", into = "[f64; 2]"))]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Build a coordinate, rejecting non-finite or out-of-range values.
    pub fn new(lat: f64, lng: f64) -> CoreResult<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(CoreError::InvalidCoordinate {
                what: "latitude",
                value: lat,
            });
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(CoreError::InvalidCoordinate {
                what: "longitude",
                value: lng,
            });
        }
        Ok(Self { lat, lng })
    }
}

impl TryFrom<[f64; 2]> for LatLng {
    type Error = CoreError;

    fn try_from([lat, lng]: [f64; 2]) -> CoreResult<Self> {
        Self::new(lat, lng)
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(c: LatLng) -> Self {
        [c.lat, c.lng]
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lng)
    }
}
