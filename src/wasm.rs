//! JS bindings for the presentation layer.
//!
//! Records, queries and results cross the boundary as plain objects via
//! `serde-wasm-bindgen`; timestamps travel as RFC 3339 strings.

use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use crate::config::CoreConfig;
use crate::cursor::{index_by_id, NavigationCursor};
use crate::density::JitterConfig;
use crate::geo::{distance_km, GeoPoint};
use crate::proximity::ProximityQuery;
use crate::query::QueryFacade;
use crate::record::Record;

fn to_js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_records(records: JsValue) -> Result<Vec<Record>, JsValue> {
    serde_wasm_bindgen::from_value(records)
        .map_err(|e| JsValue::from_str(&format!("Invalid records: {}", e)))
}

fn parse_query(query: JsValue) -> Result<ProximityQuery, JsValue> {
    serde_wasm_bindgen::from_value(query).map_err(|e| JsValue::from_str(&format!("Invalid query: {}", e)))
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        #[cfg(target_arch = "wasm32")]
        web_sys::console::error_1(&format!("[GeoQueryEngine] Serialization failed: {:?}", e).into());
        to_js_err(e)
    })
}

// =============================================================================
// GeoQueryEngine
// =============================================================================

#[wasm_bindgen]
pub struct GeoQueryEngine {
    facade: QueryFacade,
}

impl Default for GeoQueryEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl GeoQueryEngine {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            facade: QueryFacade::default(),
        }
    }

    /// Build from a JSON config string (missing fields take defaults)
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<GeoQueryEngine, JsValue> {
        let config = CoreConfig::from_json(json).map_err(to_js_err)?;
        let facade = QueryFacade::new(config).map_err(to_js_err)?;
        Ok(Self { facade })
    }

    /// Filtered markers + heat cloud
    ///
    /// `query` is `{ center: { latitude, longitude }, radius_km, unbounded }`.
    /// `jitter` is `{ count, spread_deg }`; `null`/`undefined` uses the
    /// engine config. Returns `{ records, heat, stats }`.
    #[wasm_bindgen(js_name = queryForMap)]
    pub fn query_for_map(&self, records: JsValue, query: JsValue, jitter: JsValue) -> Result<JsValue, JsValue> {
        let records = parse_records(records)?;
        let query = parse_query(query)?;
        let jitter = self.jitter_or_default(jitter)?;

        let view = self
            .facade
            .query_for_map(&query, &records, &jitter, &mut rand::thread_rng())
            .map_err(to_js_err)?;
        to_js(&view)
    }

    /// Same as `queryForMap` with a reproducible jitter cloud
    #[wasm_bindgen(js_name = queryForMapSeeded)]
    pub fn query_for_map_seeded(
        &self,
        records: JsValue,
        query: JsValue,
        seed: u64,
        jitter: JsValue,
    ) -> Result<JsValue, JsValue> {
        let records = parse_records(records)?;
        let query = parse_query(query)?;
        let jitter = self.jitter_or_default(jitter)?;

        let mut rng = StdRng::seed_from_u64(seed);
        let view = self
            .facade
            .query_for_map(&query, &records, &jitter, &mut rng)
            .map_err(to_js_err)?;
        to_js(&view)
    }

    /// Ranked triage list; pass `null`/`undefined` to skip a filter
    #[wasm_bindgen(js_name = queryForTriage)]
    pub fn query_for_triage(
        &self,
        records: JsValue,
        status: Option<String>,
        category: Option<String>,
    ) -> Result<JsValue, JsValue> {
        let records = parse_records(records)?;
        let ranked = self
            .facade
            .query_for_triage(&records, status.as_deref(), category.as_deref());
        to_js(&ranked)
    }
}

impl GeoQueryEngine {
    fn jitter_or_default(&self, jitter: JsValue) -> Result<JitterConfig, JsValue> {
        if jitter.is_null() || jitter.is_undefined() {
            return Ok(self.facade.config().jitter);
        }
        serde_wasm_bindgen::from_value(jitter).map_err(|e| JsValue::from_str(&format!("Invalid jitter: {}", e)))
    }
}

/// Haversine distance in km
#[wasm_bindgen(js_name = distanceKm)]
pub fn js_distance_km(a_lat: f64, a_lon: f64, b_lat: f64, b_lon: f64) -> f64 {
    distance_km(GeoPoint::new(a_lat, a_lon), GeoPoint::new(b_lat, b_lon))
}

// =============================================================================
// TriageCursor
// =============================================================================

#[wasm_bindgen]
pub struct TriageCursor {
    inner: NavigationCursor,
}

#[wasm_bindgen]
impl TriageCursor {
    #[wasm_bindgen(constructor)]
    pub fn new(ids: Vec<String>) -> Self {
        Self {
            inner: NavigationCursor::from_ids(ids),
        }
    }

    #[wasm_bindgen]
    pub fn reset(&mut self, ids: Vec<String>) {
        self.inner.reset(ids);
    }

    #[wasm_bindgen]
    pub fn next(&mut self) -> Option<String> {
        self.inner.next();
        self.current()
    }

    #[wasm_bindgen]
    pub fn previous(&mut self) -> Option<String> {
        self.inner.previous();
        self.current()
    }

    #[wasm_bindgen(js_name = jumpToIndex)]
    pub fn jump_to_index(&mut self, index: usize) -> Result<(), JsValue> {
        self.inner.jump_to_index(index).map_err(to_js_err)
    }

    /// Move to the record nearest `(latitude, longitude)`; returns the new
    /// index, or `undefined` if nothing in the list has a location
    #[wasm_bindgen(js_name = jumpToNearest)]
    pub fn jump_to_nearest(&mut self, latitude: f64, longitude: f64, records: JsValue) -> Result<Option<u32>, JsValue> {
        let records = parse_records(records)?;
        let by_id = index_by_id(&records);
        Ok(self
            .inner
            .jump_to_nearest(GeoPoint::new(latitude, longitude), &by_id)
            .map(|i| i as u32))
    }

    #[wasm_bindgen]
    pub fn current(&self) -> Option<String> {
        self.inner.current().map(str::to_string)
    }

    #[wasm_bindgen]
    pub fn position(&self) -> Option<u32> {
        self.inner.position().map(|i| i as u32)
    }

    #[wasm_bindgen]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
