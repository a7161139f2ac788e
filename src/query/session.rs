//! TriageSession: ranked list + navigation cursor for one admin review screen.
//!
//! Owned by a single UI session. Every `reload` rebuilds the list, the id
//! index and the cursor from scratch.

use std::collections::HashMap;

use super::facade::QueryFacade;
use super::ports::{LocationProvider, RecordSource};
use crate::cursor::{index_by_id, NavigationCursor};
use crate::error::CoreError;
use crate::geo::GeoPoint;
use crate::record::Record;
use crate::triage::TriageFilter;

#[derive(Debug, Clone, Default)]
pub struct TriageSession {
    filter: TriageFilter,
    ranked: Vec<Record>,
    by_id: HashMap<String, Record>,
    cursor: NavigationCursor,
}

impl TriageSession {
    pub fn new(filter: TriageFilter) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    /// Re-rank `records` under the session filter; the cursor restarts at the head
    pub fn reload(&mut self, facade: &QueryFacade, records: &[Record]) {
        self.ranked = facade.query_for_triage_with(records, &self.filter);
        self.by_id = index_by_id(&self.ranked);
        self.cursor
            .reset(self.ranked.iter().map(|r| r.id.clone()).collect());
    }

    /// Pull a fresh snapshot from `source` and reload
    pub fn refresh<S: RecordSource + ?Sized>(&mut self, facade: &QueryFacade, source: &S) {
        self.reload(facade, &source.current_records());
    }

    /// Change the filter; the list is rebuilt from `records`
    pub fn set_filter(&mut self, facade: &QueryFacade, filter: TriageFilter, records: &[Record]) {
        self.filter = filter;
        self.reload(facade, records);
    }

    pub fn filter(&self) -> &TriageFilter {
        &self.filter
    }

    pub fn ranked(&self) -> &[Record] {
        &self.ranked
    }

    pub fn cursor(&self) -> &NavigationCursor {
        &self.cursor
    }

    /// Record under the cursor
    pub fn current(&self) -> Option<&Record> {
        self.cursor.current().and_then(|id| self.by_id.get(id))
    }

    pub fn next(&mut self) -> Option<&Record> {
        self.cursor.next();
        self.current()
    }

    pub fn previous(&mut self) -> Option<&Record> {
        self.cursor.previous();
        self.current()
    }

    pub fn jump_to_index(&mut self, index: usize) -> Result<Option<&Record>, CoreError> {
        self.cursor.jump_to_index(index)?;
        Ok(self.current())
    }

    /// `None` (cursor unchanged) when no ranked record has a location
    pub fn jump_to_nearest(&mut self, reference: GeoPoint) -> Option<&Record> {
        self.cursor.jump_to_nearest(reference, &self.by_id)?;
        self.current()
    }

    /// Nearest record to the caller's live location; no-op when unknown
    pub fn jump_to_nearest_user<L: LocationProvider + ?Sized>(&mut self, location: &L) -> Option<&Record> {
        let reference = GeoPoint::from_option(location.current_location());
        self.jump_to_nearest(reference)
    }
}
