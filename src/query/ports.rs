//! Collaborator interfaces.
//!
//! The core never fetches: a `RecordSource` hands over whatever snapshot it
//! currently holds and a `LocationProvider` reports the last known fix, if any.

use crate::geo::GeoPoint;
use crate::record::Record;

/// Synchronous snapshot of the record store
pub trait RecordSource {
    fn current_records(&self) -> Vec<Record>;
}

/// Caller's live location; `None` is treated exactly like the unset sentinel
pub trait LocationProvider {
    fn current_location(&self) -> Option<GeoPoint>;
}

impl RecordSource for Vec<Record> {
    fn current_records(&self) -> Vec<Record> {
        self.clone()
    }
}

impl RecordSource for [Record] {
    fn current_records(&self) -> Vec<Record> {
        self.to_vec()
    }
}

/// Location provider that always reports the same fix
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FixedLocation(pub Option<GeoPoint>);

impl FixedLocation {
    pub fn at(latitude: f64, longitude: f64) -> Self {
        Self(Some(GeoPoint::new(latitude, longitude)))
    }

    pub fn unknown() -> Self {
        Self(None)
    }
}

impl LocationProvider for FixedLocation {
    fn current_location(&self) -> Option<GeoPoint> {
        self.0
    }
}
