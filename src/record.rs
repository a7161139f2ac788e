//! Core data structures shared by every component
//!
//! Records arrive from the record store already materialised; this module only
//! defines their shape and the canonical priority scale.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::geo::GeoPoint;

// =============================================================================
// Priority
// =============================================================================

/// Triage priority, canonicalised on load.
///
/// Input strings are matched case-insensitively; anything unrecognised
/// (including empty, `null` and non-string values) becomes `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    High,
    Medium,
    Low,
    #[default]
    None,
}

impl Priority {
    /// Permissive parse, never fails
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_uppercase().as_str() {
            "HIGH" => Priority::High,
            "MEDIUM" => Priority::Medium,
            "LOW" => Priority::Low,
            _ => Priority::None,
        }
    }

    /// Sort weight: HIGH=3, MEDIUM=2, LOW=1, NONE=0
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
            Priority::None => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "HIGH",
            Priority::Medium => "MEDIUM",
            Priority::Low => "LOW",
            Priority::None => "NONE",
        }
    }
}

impl From<&str> for Priority {
    fn from(raw: &str) -> Self {
        Priority::parse(raw)
    }
}

impl From<String> for Priority {
    fn from(raw: String) -> Self {
        Priority::parse(&raw)
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
        Ok(match raw {
            Some(serde_json::Value::String(s)) => Priority::parse(&s),
            _ => Priority::None,
        })
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Record
// =============================================================================

/// A geotagged incident or point of interest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique within a query batch
    pub id: String,
    /// `GeoPoint::UNSET` when the record has no location
    #[serde(default)]
    pub location: GeoPoint,
    /// Opaque type tag (the triage "type" filter compares against this)
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub priority: Priority,
    pub timestamp: DateTime<Utc>,
    /// Workflow status, e.g. "OPEN" / "RESOLVED"
    #[serde(default)]
    pub status: Option<String>,
}

impl Record {
    pub fn new(id: impl Into<String>, location: GeoPoint, priority: Priority, timestamp: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            location,
            category: String::new(),
            priority,
            timestamp,
            status: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// True unless the location is the unset sentinel
    pub fn has_location(&self) -> bool {
        self.location.is_set()
    }
}

// =============================================================================
// Heat Point
// =============================================================================

/// Weighted coordinate sample handed to a heatmap renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatPoint {
    pub location: GeoPoint,
    pub weight: f64,
}

impl HeatPoint {
    pub fn new(location: GeoPoint, weight: f64) -> Self {
        Self { location, weight }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_priority_parse_is_case_insensitive() {
        assert_eq!(Priority::parse("high"), Priority::High);
        assert_eq!(Priority::parse("High"), Priority::High);
        assert_eq!(Priority::parse(" MEDIUM "), Priority::Medium);
        assert_eq!(Priority::parse("low"), Priority::Low);
    }

    #[test]
    fn test_priority_unrecognized_is_none() {
        assert_eq!(Priority::parse("urgent"), Priority::None);
        assert_eq!(Priority::parse("hihg"), Priority::None);
        assert_eq!(Priority::parse(""), Priority::None);
        assert_eq!(Priority::None.rank(), 0);
    }

    #[test]
    fn test_priority_rank_order() {
        assert!(Priority::High.rank() > Priority::Medium.rank());
        assert!(Priority::Medium.rank() > Priority::Low.rank());
        assert!(Priority::Low.rank() > Priority::None.rank());
    }

    #[test]
    fn test_record_deserialize_canonicalizes_priority() {
        let json = r#"{
            "id": "inc-1",
            "location": { "latitude": 12.5, "longitude": -3.0 },
            "category": "flood",
            "priority": "medium",
            "timestamp": "2024-05-01T10:00:00Z",
            "status": "OPEN"
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.priority, Priority::Medium);
        assert_eq!(record.status.as_deref(), Some("OPEN"));
        assert_eq!(record.timestamp, Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap());

        let out = serde_json::to_value(&record).unwrap();
        assert_eq!(out["priority"], "MEDIUM");
    }

    #[test]
    fn test_record_missing_location_defaults_to_unset() {
        let json = r#"{ "id": "poi-9", "timestamp": "2024-05-01T10:00:00Z", "priority": "bogus" }"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert!(!record.has_location());
        assert_eq!(record.priority, Priority::None);
        assert_eq!(record.status, None);
    }

    #[test]
    fn test_record_null_priority_is_none() {
        let json = r#"{ "id": "x", "priority": null, "timestamp": "2024-05-01T10:00:00Z" }"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.priority, Priority::None);
    }

    #[test]
    fn test_record_non_string_priority_is_none() {
        for raw in ["2", "true", r#"["HIGH"]"#, r#"{ "level": "HIGH" }"#] {
            let json = format!(
                r#"{{ "id": "x", "priority": {}, "timestamp": "2024-05-01T10:00:00Z" }}"#,
                raw
            );
            let record: Record = serde_json::from_str(&json).unwrap();
            assert_eq!(record.priority, Priority::None, "priority {}", raw);
        }
    }

    #[test]
    fn test_batch_survives_malformed_priority() {
        let json = r#"[
            { "id": "a", "priority": "high", "timestamp": "2024-05-01T10:00:00Z" },
            { "id": "b", "priority": 7, "timestamp": "2024-05-01T10:00:00Z" },
            { "id": "c", "priority": null, "timestamp": "2024-05-01T10:00:00Z" }
        ]"#;
        let records: Vec<Record> = serde_json::from_str(json).unwrap();
        let priorities: Vec<Priority> = records.iter().map(|r| r.priority).collect();
        assert_eq!(priorities, vec![Priority::High, Priority::None, Priority::None]);
    }
}
