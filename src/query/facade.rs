//! QueryFacade: the map-view and triage-list workflows
//!
//! - Map view: ProximityFilter → DensityAggregator
//! - Triage list: TriageFilter → TriageRanker (→ NavigationCursor via `TriageSession`)
//!
//! The two branches share the record shape but never each other's output.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::ports::{LocationProvider, RecordSource};
use super::session::TriageSession;
use crate::config::CoreConfig;
use crate::density::{aggregate_with, JitterConfig};
use crate::error::CoreError;
use crate::geo::GeoPoint;
use crate::proximity::{filter, ProximityQuery};
use crate::record::{HeatPoint, Record};
use crate::triage::{rank, TriageFilter};

// =============================================================================
// Types
// =============================================================================

/// Counters and timing for one map query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryStats {
    pub input_count: usize,
    pub located_count: usize,
    pub matched_count: usize,
    pub heat_count: usize,
    pub filter_us: u64,
    pub aggregate_us: u64,
    pub total_us: u64,
}

/// Map workflow output: filtered markers plus their heat cloud
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub records: Vec<Record>,
    pub heat: Vec<HeatPoint>,
    pub stats: QueryStats,
}

// =============================================================================
// QueryFacade
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct QueryFacade {
    config: CoreConfig,
}

impl QueryFacade {
    pub fn new(config: CoreConfig) -> Result<Self, CoreError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// Filter by proximity, then build the heat cloud over the survivors
    pub fn query_for_map<R: Rng + ?Sized>(
        &self,
        query: &ProximityQuery,
        records: &[Record],
        jitter: &JitterConfig,
        rng: &mut R,
    ) -> Result<MapView, CoreError> {
        let overall_start = instant::Instant::now();
        let mut stats = QueryStats {
            input_count: records.len(),
            located_count: records.iter().filter(|r| r.has_location()).count(),
            ..QueryStats::default()
        };

        let filter_start = instant::Instant::now();
        let matched = filter(query, records)?;
        stats.filter_us = filter_start.elapsed().as_micros() as u64;
        stats.matched_count = matched.len();

        let aggregate_start = instant::Instant::now();
        let heat = aggregate_with(&matched, jitter, rng)?;
        stats.aggregate_us = aggregate_start.elapsed().as_micros() as u64;
        stats.heat_count = heat.len();

        stats.total_us = overall_start.elapsed().as_micros() as u64;

        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&format!(
            "[QueryFacade] map: {}/{} located, {} matched, {} heat points ({}us)",
            stats.located_count, stats.input_count, stats.matched_count, stats.heat_count, stats.total_us
        ).into());

        Ok(MapView {
            records: matched,
            heat,
            stats,
        })
    }

    /// Apply the optional status / type equality filters, then rank
    pub fn query_for_triage(
        &self,
        records: &[Record],
        status: Option<&str>,
        category: Option<&str>,
    ) -> Vec<Record> {
        let filter = TriageFilter::new(status.map(str::to_string), category.map(str::to_string));
        self.query_for_triage_with(records, &filter)
    }

    pub fn query_for_triage_with(&self, records: &[Record], filter: &TriageFilter) -> Vec<Record> {
        let ranked = rank(&filter.apply(records));

        #[cfg(target_arch = "wasm32")]
        web_sys::console::log_1(&format!(
            "[QueryFacade] triage: {} of {} records ranked",
            ranked.len(),
            records.len()
        ).into());

        ranked
    }

    /// Map query for the current snapshot, centred on the caller's location.
    ///
    /// Uses the configured show-all flag, radius and jitter. An absent
    /// location becomes the unset sentinel.
    pub fn map_view_from<S, L, R>(&self, source: &S, location: &L, rng: &mut R) -> Result<MapView, CoreError>
    where
        S: RecordSource + ?Sized,
        L: LocationProvider + ?Sized,
        R: Rng + ?Sized,
    {
        let query = if self.config.show_all {
            ProximityQuery::unbounded()
        } else {
            let center = GeoPoint::from_option(location.current_location());
            ProximityQuery::within(center, self.config.default_radius_km)?
        };
        let records = source.current_records();
        self.query_for_map(&query, &records, &self.config.jitter, rng)
    }

    /// Ranked triage list for the current snapshot, with a fresh cursor
    pub fn triage_session<S: RecordSource + ?Sized>(&self, source: &S, filter: TriageFilter) -> TriageSession {
        let mut session = TriageSession::new(filter);
        session.reload(self, &source.current_records());
        session
    }
}
