use super::*;
use std::collections::BTreeMap;

#[test]
fn ping_parses() {
    let ping: Ping = serde_json::from_str(r#"{"ok":true}"#).unwrap();
    assert!(ping.ok);
}

#[test]
fn row_parses_server_shape() {
    let json = r#"{
        "row_index": 3,
        "cells": {
            "A": {"type": "string", "value": "widget"},
            "B": {"type": "number", "value": 12.5, "meta": {"fmt": "0.00"}}
        },
        "version": 4
    }"#;
    let row: Row = serde_json::from_str(json).unwrap();
    assert_eq!(row.row_index, 3);
    assert_eq!(row.version, 4);
    assert_eq!(row.cells["A"].kind, "string");
    assert_eq!(row.cells["A"].display(), "widget");
    assert_eq!(row.cells["B"].display(), "12.5");
    assert!(row.cells["B"].meta.is_some());
}

#[test]
fn row_defaults_missing_cells_and_version() {
    let row: Row = serde_json::from_str(r#"{"row_index": 1}"#).unwrap();
    assert!(row.cells.is_empty());
    assert_eq!(row.version, 1);
}

#[test]
fn cell_null_value_displays_empty() {
    let cell: Cell = serde_json::from_str(r#"{"type":"string","value":null}"#).unwrap();
    assert_eq!(cell.display(), "");
}

#[test]
fn cell_serializes_kind_as_type() {
    let cell = Cell { kind: "date".to_owned(), value: serde_json::json!("2024-01-02"), meta: None };
    let json = serde_json::to_value(&cell).unwrap();
    assert_eq!(json, serde_json::json!({ "type": "date", "value": "2024-01-02" }));
}

#[test]
fn columns_are_unique_and_spreadsheet_ordered() {
    let rows: Vec<Row> = serde_json::from_str(
        r#"[
            {"row_index": 1, "cells": {"B": {"type":"string","value":"x"}, "AA": {"type":"string","value":"y"}}},
            {"row_index": 2, "cells": {"A": {"type":"string","value":"z"}, "B": {"type":"string","value":"w"}}}
        ]"#,
    )
    .unwrap();
    assert_eq!(columns(&rows), vec!["A", "B", "AA"]);
}

#[test]
fn cell_from_input_types_numbers() {
    assert_eq!(Cell::from_input(" 42 ").kind, "number");
    assert_eq!(Cell::from_input("42").value, serde_json::json!(42));
    assert_eq!(Cell::from_input("2.5").value, serde_json::json!(2.5));
    assert_eq!(Cell::from_input("2.5").display(), "2.5");
}

#[test]
fn cell_from_input_keeps_other_text_as_string() {
    let cell = Cell::from_input(" widget ");
    assert_eq!(cell.kind, "string");
    assert_eq!(cell.display(), "widget");
    assert_eq!(Cell::from_input("NaN").kind, "string");
    assert_eq!(Cell::from_input("inf").kind, "string");
}

#[test]
fn row_patch_omits_unset_optional_fields() {
    let patch = RowPatch {
        changes: BTreeMap::from([("A".to_owned(), CellChange { old: None, new: None })]),
        ..RowPatch::default()
    };
    let json = serde_json::to_value(&patch).unwrap();
    assert_eq!(json, serde_json::json!({ "changes": { "A": { "old": null, "new": null } } }));
}

#[test]
fn row_patch_carries_expected_version() {
    let patch = RowPatch { expected_version: Some(3), ..RowPatch::default() };
    assert_eq!(serde_json::to_value(&patch).unwrap()["expected_version"], 3);
}

#[test]
fn row_change_tolerates_missing_optional_fields() {
    let change: RowChange = serde_json::from_str(r#"{"id":"op-1","op_type":"insert_row"}"#).unwrap();
    assert_eq!(change.op_type, "insert_row");
    assert!(change.payload.is_none());
    assert!(change.user_id.is_none());
}
