//! GeoTriage: Proximity, Heat and Triage Core
//!
//! A Rust/WASM implementation of the geotagged-record query core behind the
//! incident map, heatmap and admin triage screens.
//!
//! # Architecture
//!
//! ## Spatial Components
//! - `geo` - GeoPoint + haversine distance / initial bearing
//! - `proximity` - Radius filter (stable) and distance ordering
//! - `density` - Jittered heat-point cloud for heatmap overlays
//!
//! ## Triage Components
//! - `triage` - Priority / recency / id ranking + status & type filters
//! - `cursor` - Next / previous / nearest navigation over an ordered id list
//!
//! ## Composition
//! - `query` - QueryFacade (map + triage workflows) and collaborator ports
//! - `config` - Defaults and presets
//! - `wasm` - JS bindings
//!
//! # Usage (WASM)
//! ```javascript,ignore
//! import init, { GeoQueryEngine, TriageCursor } from 'geotriage';
//!
//! await init();
//! const engine = new GeoQueryEngine();
//!
//! // Everything with a location, plus its heat cloud
//! const view = engine.queryForMap(records, { center, radius_km: 5, unbounded: false });
//!
//! // Admin triage list
//! const ranked = engine.queryForTriage(records, "OPEN", null);
//! const cursor = new TriageCursor(ranked.map(r => r.id));
//! cursor.next();
//! ```

pub mod config;
pub mod cursor;
pub mod density;
pub mod error;
pub mod geo;
pub mod proximity;
pub mod query;
pub mod record;
pub mod triage;
pub mod wasm;

pub use config::CoreConfig;
pub use cursor::{CursorState, NavigationCursor};
pub use density::{aggregate, aggregate_with, JitterConfig};
pub use error::CoreError;
pub use geo::{distance_km, initial_bearing_deg, GeoPoint, EARTH_RADIUS_KM};
pub use proximity::{filter, order_by_distance, ProximityQuery};
pub use query::*;
pub use record::{HeatPoint, Priority, Record};
pub use triage::{rank, TriageFilter};

use wasm_bindgen::prelude::*;

// When the `wee_alloc` feature is enabled, use `wee_alloc` as the global
// allocator for smaller WASM bundle size.
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

/// Initialize panic hook for better error messages in browser console
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    format!("geotriage v{}", env!("CARGO_PKG_VERSION"))
}
