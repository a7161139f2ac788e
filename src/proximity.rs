//! Proximity filtering over small in-memory record sets.
//!
//! Brute-force scan: every record is checked against the query center. Record
//! sets coming from the store are small enough that no spatial index is kept.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::error::CoreError;
use crate::geo::{distance_km, GeoPoint};
use crate::record::Record;

/// Radius query around a center point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProximityQuery {
    pub center: GeoPoint,
    pub radius_km: f64,
    /// When true the radius is ignored and every located record passes
    #[serde(default)]
    pub unbounded: bool,
}

impl ProximityQuery {
    /// Bounded query; rejects a negative or NaN radius
    pub fn within(center: GeoPoint, radius_km: f64) -> Result<Self, CoreError> {
        let query = Self {
            center,
            radius_km,
            unbounded: false,
        };
        query.validate()?;
        Ok(query)
    }

    /// Show-all query
    pub fn unbounded() -> Self {
        Self {
            center: GeoPoint::UNSET,
            radius_km: 0.0,
            unbounded: true,
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.unbounded {
            return Ok(());
        }
        if self.radius_km.is_nan() || self.radius_km < 0.0 {
            return Err(CoreError::InvalidRadius(self.radius_km));
        }
        Ok(())
    }

    /// Does a single location pass this query?
    pub fn admits(&self, location: GeoPoint) -> bool {
        if !location.is_set() {
            return false;
        }
        self.unbounded || distance_km(self.center, location) <= self.radius_km
    }
}

/// Keep the located records that fall within the query radius.
///
/// Stable: output keeps the input's relative order.
pub fn filter(query: &ProximityQuery, records: &[Record]) -> Result<Vec<Record>, CoreError> {
    query.validate()?;
    Ok(records
        .iter()
        .filter(|r| query.admits(r.location))
        .cloned()
        .collect())
}

/// Located records sorted nearest-first from `reference`.
///
/// Equal distances fall back to `id`. Unset records and NaN distances are
/// dropped. An unset reference yields an empty list.
pub fn order_by_distance(reference: GeoPoint, records: &[Record]) -> Vec<Record> {
    if !reference.is_set() {
        return Vec::new();
    }

    let mut scored: Vec<(f64, &Record)> = records
        .iter()
        .filter(|r| r.has_location())
        .map(|r| (distance_km(reference, r.location), r))
        .filter(|(d, _)| !d.is_nan())
        .collect();

    scored.sort_by(|(da, a), (db, b)| {
        da.partial_cmp(db)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.id.cmp(&b.id))
    });

    scored.into_iter().map(|(_, r)| r.clone()).collect()
}
