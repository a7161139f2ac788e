//! NavigationCursor: next / previous / nearest stepping over an ordered id list
//!
//! The cursor is single-owner session state. It is rebuilt with `reset`
//! whenever the underlying list changes; there is no incremental patching and
//! the previous position is never carried over.

use std::collections::HashMap;

use crate::error::CoreError;
use crate::geo::{distance_km, GeoPoint};
use crate::record::Record;

/// Cursor position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    Empty,
    Positioned(usize),
}

/// Wrap-around cursor over externally ordered ids
#[derive(Debug, Clone)]
pub struct NavigationCursor {
    ordered_ids: Vec<String>,
    state: CursorState,
}

impl Default for NavigationCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationCursor {
    /// An `Empty` cursor
    pub fn new() -> Self {
        Self {
            ordered_ids: Vec::new(),
            state: CursorState::Empty,
        }
    }

    /// Cursor positioned at the head of `ordered_ids`
    pub fn from_ids(ordered_ids: Vec<String>) -> Self {
        let mut cursor = Self::new();
        cursor.reset(ordered_ids);
        cursor
    }

    /// Replace the id list. Empty list → `Empty`, otherwise `Positioned(0)`.
    pub fn reset(&mut self, ordered_ids: Vec<String>) {
        self.state = if ordered_ids.is_empty() {
            CursorState::Empty
        } else {
            CursorState::Positioned(0)
        };
        self.ordered_ids = ordered_ids;
    }

    pub fn next(&mut self) {
        if let CursorState::Positioned(i) = self.state {
            self.state = CursorState::Positioned((i + 1) % self.ordered_ids.len());
        }
    }

    pub fn previous(&mut self) {
        if let CursorState::Positioned(i) = self.state {
            let len = self.ordered_ids.len();
            self.state = CursorState::Positioned((i + len - 1) % len);
        }
    }

    /// Move to an explicit index; out of range leaves the cursor untouched
    pub fn jump_to_index(&mut self, index: usize) -> Result<(), CoreError> {
        let len = self.ordered_ids.len();
        if index >= len {
            return Err(CoreError::IndexOutOfRange { index, len });
        }
        self.state = CursorState::Positioned(index);
        Ok(())
    }

    /// Position on the id in the current list whose record is closest to
    /// `reference`.
    ///
    /// Ids without a record, records without a location and NaN distances
    /// are skipped. Equal distances keep the earlier list position. With no
    /// candidate (or an unset reference) the cursor is left as it was.
    pub fn jump_to_nearest(
        &mut self,
        reference: GeoPoint,
        records: &HashMap<String, Record>,
    ) -> Option<usize> {
        if !reference.is_set() {
            return None;
        }

        let mut best: Option<(usize, f64)> = None;
        for (idx, id) in self.ordered_ids.iter().enumerate() {
            let record = match records.get(id) {
                Some(r) if r.has_location() => r,
                _ => continue,
            };
            let d = distance_km(reference, record.location);
            if d.is_nan() {
                continue;
            }
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((idx, d)),
            }
        }

        let (idx, _) = best?;
        self.state = CursorState::Positioned(idx);
        Some(idx)
    }

    /// Id under the cursor, `None` when empty
    pub fn current(&self) -> Option<&str> {
        match self.state {
            CursorState::Empty => None,
            CursorState::Positioned(i) => self.ordered_ids.get(i).map(String::as_str),
        }
    }

    pub fn state(&self) -> CursorState {
        self.state
    }

    pub fn position(&self) -> Option<usize> {
        match self.state {
            CursorState::Empty => None,
            CursorState::Positioned(i) => Some(i),
        }
    }

    pub fn len(&self) -> usize {
        self.ordered_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered_ids.is_empty()
    }

    pub fn ids(&self) -> &[String] {
        &self.ordered_ids
    }
}

/// id → record lookup for `jump_to_nearest`
pub fn index_by_id(records: &[Record]) -> HashMap<String, Record> {
    records.iter().map(|r| (r.id.clone(), r.clone())).collect()
}
