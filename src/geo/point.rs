//! GeoPoint: a WGS84 latitude/longitude pair.
//!
//! `(0.0, 0.0)` is overloaded as "location not set" by the record store.
//! Anything spatial must check `is_set()` before using a point.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Immutable latitude/longitude value in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// The "no location" sentinel
    pub const UNSET: GeoPoint = GeoPoint {
        latitude: 0.0,
        longitude: 0.0,
    };

    /// Create a point without range checks
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Create a point, rejecting NaN and out-of-range coordinates
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, CoreError> {
        let point = Self::new(latitude, longitude);
        if point.in_range() {
            Ok(point)
        } else {
            Err(CoreError::InvalidCoordinate {
                latitude,
                longitude,
            })
        }
    }

    /// Map an optional location onto the sentinel, so "absent" and "unset"
    /// behave identically downstream
    pub fn from_option(location: Option<GeoPoint>) -> Self {
        location.unwrap_or(Self::UNSET)
    }

    /// False for the `(0,0)` sentinel
    pub fn is_set(&self) -> bool {
        !(self.latitude == 0.0 && self.longitude == 0.0)
    }

    /// `Some(self)` unless this is the sentinel
    pub fn as_option(&self) -> Option<GeoPoint> {
        if self.is_set() {
            Some(*self)
        } else {
            None
        }
    }

    /// Both coordinates finite and within WGS84 bounds
    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Shift by a delta in degrees.
    ///
    /// Latitude is clamped to the poles; longitude wraps across the antimeridian.
    pub fn offset(&self, delta_lat: f64, delta_lon: f64) -> Self {
        let latitude = (self.latitude + delta_lat).clamp(-90.0, 90.0);
        let mut longitude = self.longitude + delta_lon;
        if !(-180.0..=180.0).contains(&longitude) {
            longitude = (longitude + 180.0).rem_euclid(360.0) - 180.0;
        }
        Self::new(latitude, longitude)
    }
}

impl Default for GeoPoint {
    fn default() -> Self {
        Self::UNSET
    }
}

impl From<(f64, f64)> for GeoPoint {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}
