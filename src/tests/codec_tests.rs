//! Tests for the persisted-document codec and the summary renderer.

use crate::codec::{self, summary::NO_SUMMARY, ParseError};
use crate::core::config::ConfigValue;
use crate::core::registry::BlockTypeRegistry;
use crate::report::store::ReportStore;

fn sample_store() -> ReportStore {
    let registry = BlockTypeRegistry::new();
    let mut store = ReportStore::new();
    for tag in ["kpi", "chart_line", "filter_dropdown"] {
        store.append(registry.instantiate(tag).unwrap()).unwrap();
    }
    store
}

/// Round-trip law: persist-then-load is the identity on (id, type, title,
/// config) tuples and their order.
#[test]
fn test_round_trip_is_identity() {
    let mut store = sample_store();
    let id = store.blocks()[0].id.clone();
    store.set_title(&id, "Edited Title").unwrap();
    store
        .set_config_field(&id, "value", ConfigValue::from("99999"))
        .unwrap();

    let document = codec::to_persisted(&store).unwrap();
    let loaded = codec::from_persisted(&document).unwrap();

    assert_eq!(loaded, store.blocks());
}

#[test]
fn test_document_is_an_ordered_array_of_records() {
    let store = sample_store();
    let document = codec::to_persisted(&store).unwrap();

    let value: serde_json::Value = serde_json::from_str(&document).unwrap();
    let records = value.as_array().expect("top level must be an array");
    assert_eq!(records.len(), 3);
    for record in records {
        for key in ["id", "type", "title", "config"] {
            assert!(record.get(key).is_some(), "record missing {key}");
        }
    }
    // Array order is the report's render order.
    assert_eq!(records[0]["type"], "kpi");
    assert_eq!(records[1]["type"], "chart_line");
    assert_eq!(records[2]["type"], "filter_dropdown");
}

/// The export artifact is the same document, pretty-printed with 2-space
/// indentation.
#[test]
fn test_export_is_pretty_printed() {
    let store = sample_store();
    let export = codec::to_export(&store).unwrap();

    assert!(export.contains("\n  {") || export.starts_with("[\n  "));
    let loaded = codec::from_persisted(&export).unwrap();
    assert_eq!(loaded, store.blocks());
}

#[test]
fn test_top_level_object_is_rejected() {
    let result = codec::from_persisted(r#"{"blocks": []}"#);
    assert!(matches!(result, Err(ParseError::Malformed(_))));
}

#[test]
fn test_record_missing_field_is_rejected() {
    // "title" is absent.
    let document = r#"[{"id": "1", "type": "kpi", "config": {}}]"#;
    let result = codec::from_persisted(document);
    assert!(matches!(result, Err(ParseError::Malformed(_))));
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let document = r#"[
        {"id": "same", "type": "kpi", "title": "A", "config": {}},
        {"id": "same", "type": "kpi", "title": "B", "config": {}}
    ]"#;
    let result = codec::from_persisted(document);
    assert!(matches!(result, Err(ParseError::DuplicateId(_))));
}

/// Forward compatibility: unknown type tags and unknown config fields load,
/// survive, and save back out unchanged.
#[test]
fn test_unknown_type_and_fields_pass_through() {
    let document = r#"[
        {"id": "b1", "type": "unknown_type", "title": "Future Block",
         "config": {"mystery": {"nested": [1, 2, 3]}}}
    ]"#;

    let blocks = codec::from_persisted(document).unwrap();
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].type_tag(), "unknown_type");
    assert_eq!(codec::summarize(&blocks[0]), NO_SUMMARY);

    let store = ReportStore::from_blocks(blocks).unwrap();
    let saved = codec::to_persisted(&store).unwrap();
    let reloaded = codec::from_persisted(&saved).unwrap();
    assert_eq!(reloaded, store.blocks());
}

/// Documents written by the original frontend (timestamp ids, numeric kpi
/// value) load unchanged.
#[test]
fn test_legacy_document_loads() {
    let document = r#"[
        {"id": "1699999999999", "type": "kpi", "title": "Revenue KPI",
         "config": {"value": 12345, "unit": "₹", "trend": "+12% vs last month"}}
    ]"#;

    let blocks = codec::from_persisted(document).unwrap();
    assert_eq!(blocks[0].id.as_str(), "1699999999999");
    assert_eq!(
        codec::summarize(&blocks[0]),
        "₹12345 (+12% vs last month)"
    );
}

// ── Summaries ───────────────────────────────────────────────────────────────

#[test]
fn test_kpi_default_summary() {
    let registry = BlockTypeRegistry::new();
    let block = registry.instantiate("kpi").unwrap();
    assert_eq!(codec::summarize(&block), "₹12345 (+12% vs last month)");
}

#[test]
fn test_kpi_summary_after_edit() {
    let registry = BlockTypeRegistry::new();
    let mut store = ReportStore::new();
    let id = store
        .append(registry.instantiate("kpi").unwrap())
        .unwrap()
        .id
        .clone();

    store
        .set_config_field(&id, "value", ConfigValue::from("99999"))
        .unwrap();
    let block = store.find(&id).unwrap();
    assert_eq!(codec::summarize(block), "₹99999 (+12% vs last month)");
}

#[test]
fn test_chart_summary() {
    let registry = BlockTypeRegistry::new();
    for tag in ["chart_bar", "chart_line"] {
        let block = registry.instantiate(tag).unwrap();
        assert_eq!(
            codec::summarize(&block),
            "X: date, Y: revenue. Sample chart configuration."
        );
    }
}

#[test]
fn test_filter_and_layout_summaries() {
    let registry = BlockTypeRegistry::new();

    let dropdown = registry.instantiate("filter_dropdown").unwrap();
    assert_eq!(
        codec::summarize(&dropdown),
        "Field: region, Options: North, South, East, West"
    );

    let date = registry.instantiate("filter_date").unwrap();
    assert_eq!(codec::summarize(&date), "Default range: last_30_days");

    let layout = registry.instantiate("layout_two_column").unwrap();
    assert_eq!(codec::summarize(&layout), "Columns: 1:1");
}

/// Absent fields render as empty text — never the literal "undefined".
#[test]
fn test_summary_with_missing_fields() {
    let registry = BlockTypeRegistry::new();
    let mut block = registry.instantiate("kpi").unwrap();
    block.config.clear();

    let summary = codec::summarize(&block);
    assert_eq!(summary, " ()");
    assert!(!summary.contains("undefined"));
}
