//! Equality filters applied before triage ranking.

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Conjunction of optional equality checks; `None` matches everything
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageFilter {
    /// Compared against `Record::status`
    #[serde(default)]
    pub status: Option<String>,
    /// Compared against `Record::category` (the record "type")
    #[serde(default)]
    pub category: Option<String>,
}

impl TriageFilter {
    pub fn new(status: Option<String>, category: Option<String>) -> Self {
        Self { status, category }
    }

    /// Match-all filter
    pub fn all() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn matches(&self, record: &Record) -> bool {
        let status_ok = match &self.status {
            Some(wanted) => record.status.as_deref() == Some(wanted.as_str()),
            None => true,
        };
        let category_ok = match &self.category {
            Some(wanted) => record.category == *wanted,
            None => true,
        };
        status_ok && category_ok
    }

    /// Stable filter over a record slice
    pub fn apply(&self, records: &[Record]) -> Vec<Record> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::GeoPoint;
    use crate::record::Priority;
    use chrono::{TimeZone, Utc};

    fn rec(id: &str, category: &str, status: Option<&str>) -> Record {
        let mut r = Record::new(
            id,
            GeoPoint::new(3.0, 4.0),
            Priority::Medium,
            Utc.with_ymd_and_hms(2024, 2, 2, 2, 2, 2).unwrap(),
        )
        .with_category(category);
        r.status = status.map(str::to_string);
        r
    }

    fn sample() -> Vec<Record> {
        vec![
            rec("1", "fire", Some("OPEN")),
            rec("2", "flood", Some("OPEN")),
            rec("3", "fire", Some("RESOLVED")),
            rec("4", "fire", None),
        ]
    }

    fn ids(records: &[Record]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_absent_filters_match_all() {
        assert_eq!(TriageFilter::all().apply(&sample()).len(), 4);
    }

    #[test]
    fn test_status_only() {
        let f = TriageFilter::all().with_status("OPEN");
        assert_eq!(ids(&f.apply(&sample())), vec!["1", "2"]);
    }

    #[test]
    fn test_category_only() {
        let f = TriageFilter::all().with_category("fire");
        assert_eq!(ids(&f.apply(&sample())), vec!["1", "3", "4"]);
    }

    #[test]
    fn test_conjunction() {
        let f = TriageFilter::new(Some("OPEN".into()), Some("fire".into()));
        assert_eq!(ids(&f.apply(&sample())), vec!["1"]);
    }

    #[test]
    fn test_missing_status_fails_status_filter() {
        let f = TriageFilter::all().with_status("RESOLVED");
        assert_eq!(ids(&f.apply(&sample())), vec!["3"]);
    }
}
