//! Composite triage ordering.
//!
//! Key, in order: priority rank (desc), timestamp (latest first), id (asc).
//! The id tie-break makes the order total, so ranking is deterministic and
//! idempotent even when priority and timestamp collide.

use std::cmp::Ordering;

use crate::record::Record;

/// Triage comparator; `Less` means `a` is shown before `b`
pub fn compare(a: &Record, b: &Record) -> Ordering {
    b.priority
        .rank()
        .cmp(&a.priority.rank())
        .then_with(|| b.timestamp.cmp(&a.timestamp))
        .then_with(|| a.id.cmp(&b.id))
}

/// Return a ranked copy of `records`; the input is left untouched
pub fn rank(records: &[Record]) -> Vec<Record> {
    let mut ranked = records.to_vec();
    ranked.sort_by(compare);
    ranked
}
