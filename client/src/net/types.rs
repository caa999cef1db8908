//! REST payloads exchanged with the spreadsheet API.
//!
//! DESIGN
//! ======
//! Field names mirror the server's JSON so serde needs no renames except for
//! the cell `type` keyword.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Health check response from `/ping`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ping {
    pub ok: bool,
}

/// Response to `POST /register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub username: String,
}

/// Response to `POST /spreadsheets`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spreadsheet {
    pub id: String,
    pub title: String,
}

/// One typed cell value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// `"string"`, `"number"`, `"date"`, `"datetime"` or `"json"`.
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub value: serde_json::Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
}

impl Cell {
    /// Type text typed into the grid: integers and finite decimals become
    /// `"number"` cells, everything else a `"string"` cell.
    pub fn from_input(raw: &str) -> Self {
        let text = raw.trim();
        let value = if let Ok(int) = text.parse::<i64>() {
            serde_json::Value::from(int)
        } else if let Some(num) = text
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .and_then(serde_json::Number::from_f64)
        {
            serde_json::Value::Number(num)
        } else {
            return Self { kind: "string".to_owned(), value: serde_json::Value::from(text), meta: None };
        };
        Self { kind: "number".to_owned(), value, meta: None }
    }

    /// Text shown in a grid cell.
    pub fn display(&self) -> String {
        match &self.value {
            serde_json::Value::Null => String::new(),
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

/// A spreadsheet row keyed by column letter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub row_index: i64,
    #[serde(default)]
    pub cells: BTreeMap<String, Cell>,
    #[serde(default = "default_row_version")]
    pub version: i64,
}

fn default_row_version() -> i64 {
    1
}

/// Column letters used by `rows`, in sorted order.
pub fn columns(rows: &[Row]) -> Vec<String> {
    let mut cols: Vec<String> = rows.iter().flat_map(|r| r.cells.keys().cloned()).collect();
    cols.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    cols.dedup();
    cols
}

/// Body of `POST /spreadsheets/{id}/rows`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewRow {
    pub row_index: i64,
    pub cells: BTreeMap<String, Cell>,
}

/// Response to a row insert.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowInserted {
    pub ok: bool,
    pub row_index: i64,
}

/// Old and new value of one cell. `new: None` clears the cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CellChange {
    pub old: Option<Cell>,
    pub new: Option<Cell>,
}

/// Body of `PATCH /spreadsheets/{id}/rows/{row_index}`.
///
/// With `expected_version` set, the server answers 409 if the row was
/// modified after that version was read.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RowPatch {
    pub changes: BTreeMap<String, CellChange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_version: Option<i64>,
}

/// Response to a row patch, carrying the row's new version.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowPatched {
    pub ok: bool,
    pub row_index: i64,
    pub version: i64,
}

/// One audited change from a row's history, newest first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RowChange {
    pub id: String,
    /// `"insert_row"` or `"update_cells"`.
    pub op_type: String,
    #[serde(default)]
    pub payload: Option<serde_json::Value>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}
