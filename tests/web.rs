//! Browser-side checks for the JS bindings.
//! Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use geotriage::wasm::{GeoQueryEngine, TriageCursor};
use geotriage::{distance_km, GeoPoint, JitterConfig, Record};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn records_js() -> JsValue {
    let json = r#"[
        { "id": "a", "location": { "latitude": 0.0, "longitude": 0.0 }, "priority": "low",
          "timestamp": "2024-01-01T00:00:00Z", "category": "poi", "status": "OPEN" },
        { "id": "b", "location": { "latitude": 0.01, "longitude": 0.01 }, "priority": "HIGH",
          "timestamp": "2024-01-02T00:00:00Z", "category": "poi", "status": "OPEN" },
        { "id": "c", "location": { "latitude": 3.0, "longitude": 3.0 }, "priority": "high",
          "timestamp": "2024-01-03T00:00:00Z", "category": "fire", "status": "OPEN" }
    ]"#;
    let records: Vec<Record> = serde_json::from_str(json).unwrap();
    serde_wasm_bindgen::to_value(&records).unwrap()
}

#[wasm_bindgen_test]
fn test_distance_binding() {
    let d = geotriage::wasm::js_distance_km(1.0, 1.0, 2.0, 2.0);
    assert_eq!(d, distance_km(GeoPoint::new(1.0, 1.0), GeoPoint::new(2.0, 2.0)));
}

#[wasm_bindgen_test]
fn test_query_for_map_binding() {
    let engine = GeoQueryEngine::from_config_json(r#"{ "jitter": { "count": 2, "spread_deg": 0.01 } }"#).unwrap();
    let query = serde_wasm_bindgen::to_value(&geotriage::ProximityQuery::within(GeoPoint::UNSET, 5.0).unwrap()).unwrap();
    let view = engine.query_for_map_seeded(records_js(), query, 7, JsValue::UNDEFINED).unwrap();
    let view: serde_json::Value = serde_wasm_bindgen::from_value(view).unwrap();
    assert_eq!(view["records"].as_array().unwrap().len(), 1);
    assert_eq!(view["records"][0]["id"], "b");
    assert_eq!(view["heat"].as_array().unwrap().len(), 3);
}

#[wasm_bindgen_test]
fn test_query_for_map_per_call_jitter() {
    let engine = GeoQueryEngine::new();
    let query = serde_wasm_bindgen::to_value(&geotriage::ProximityQuery::within(GeoPoint::UNSET, 5.0).unwrap()).unwrap();
    let jitter = serde_wasm_bindgen::to_value(&JitterConfig::new(4, 0.02)).unwrap();
    let view = engine.query_for_map(records_js(), query.clone(), jitter).unwrap();
    let view: serde_json::Value = serde_wasm_bindgen::from_value(view).unwrap();
    assert_eq!(view["heat"].as_array().unwrap().len(), 5);

    let view = engine.query_for_map(records_js(), query.clone(), JsValue::NULL).unwrap();
    let view: serde_json::Value = serde_wasm_bindgen::from_value(view).unwrap();
    assert_eq!(view["heat"].as_array().unwrap().len(), 1 + JitterConfig::default().count);

    let bad = serde_wasm_bindgen::to_value(&JitterConfig::new(1, 720.0)).unwrap();
    assert!(engine.query_for_map(records_js(), query, bad).is_err());
}

#[wasm_bindgen_test]
fn test_query_for_triage_binding() {
    let engine = GeoQueryEngine::new();
    let ranked = engine.query_for_triage(records_js(), Some("OPEN".into()), None).unwrap();
    let ranked: Vec<Record> = serde_wasm_bindgen::from_value(ranked).unwrap();
    let ids: Vec<&str> = ranked.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "b", "a"]);
}

#[wasm_bindgen_test]
fn test_cursor_binding() {
    let mut cursor = TriageCursor::new(vec!["c".into(), "b".into(), "a".into()]);
    assert_eq!(cursor.next(), Some("b".to_string()));
    assert_eq!(cursor.jump_to_nearest(2.9, 2.9, records_js()).unwrap(), Some(0));
    assert!(cursor.jump_to_index(9).is_err());

    cursor.reset(Vec::new());
    assert_eq!(cursor.current(), None);
    assert_eq!(cursor.next(), None);
}
