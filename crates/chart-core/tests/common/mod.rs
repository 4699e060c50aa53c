// File: crates/chart-core/tests/common/mod.rs
// Purpose: Shared fixture loading for integration tests.

use cyclist_chart_core::{records_from_json, Record};

pub fn fixture_json() -> serde_json::Value {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/cyclist-data.json");
    let text = std::fs::read_to_string(&path).expect("read fixture");
    serde_json::from_str(&text).expect("fixture is valid JSON")
}

pub fn fixture_records() -> Vec<Record> {
    records_from_json(&fixture_json()).expect("fixture coerces")
}
