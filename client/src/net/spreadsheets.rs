//! Typed bindings for the spreadsheet endpoints.

#[cfg(test)]
#[path = "spreadsheets_test.rs"]
mod spreadsheets_test;

use super::api::{ApiClient, ApiError, json_body};
use super::types::{NewRow, Ping, Row, RowChange, RowInserted, RowPatch, RowPatched, Spreadsheet};

/// First row fetched when no range is given.
pub const DEFAULT_ROW_START: u32 = 1;
/// Last row fetched when no range is given.
pub const DEFAULT_ROW_END: u32 = 100;
/// Number of history entries requested per row.
pub const DEFAULT_HISTORY_LIMIT: u32 = 50;

fn rows_endpoint(sheet_id: &str) -> String {
    format!("/spreadsheets/{sheet_id}/rows")
}

fn row_range_endpoint(sheet_id: &str, start: u32, end: u32) -> String {
    format!("{}?start={start}&end={end}", rows_endpoint(sheet_id))
}

fn row_endpoint(sheet_id: &str, row_index: i64) -> String {
    format!("{}/{row_index}", rows_endpoint(sheet_id))
}

fn row_history_endpoint(sheet_id: &str, row_index: i64, limit: u32) -> String {
    format!("{}/history?limit={limit}", row_endpoint(sheet_id, row_index))
}

/// Ask `/ping` whether the API is up.
///
/// # Errors
///
/// Returns the underlying [`ApiError`] if the request fails.
pub async fn ping(api: &ApiClient) -> Result<Ping, ApiError> {
    api.get("/ping").await
}

/// Create a spreadsheet with `title` via `POST /spreadsheets`.
///
/// # Errors
///
/// Returns the underlying [`ApiError`] if the request fails.
pub async fn create_spreadsheet(api: &ApiClient, title: &str) -> Result<Spreadsheet, ApiError> {
    api.post("/spreadsheets", serde_json::json!({ "title": title })).await
}

/// Fetch rows `start..=end` of `sheet_id`.
///
/// # Errors
///
/// Returns the underlying [`ApiError`] if the request fails.
pub async fn fetch_rows(api: &ApiClient, sheet_id: &str, start: u32, end: u32) -> Result<Vec<Row>, ApiError> {
    api.get(&row_range_endpoint(sheet_id, start, end)).await
}

/// Insert a new row into `sheet_id`.
///
/// # Errors
///
/// The server answers 404 for an unknown sheet and 400 when the row index is
/// already taken; both surface as [`ApiError::Status`].
pub async fn insert_row(api: &ApiClient, sheet_id: &str, row: &NewRow) -> Result<RowInserted, ApiError> {
    api.post(&rows_endpoint(sheet_id), json_body(row)?).await
}

/// Apply cell changes to one row.
///
/// # Errors
///
/// A stale `expected_version` surfaces as `ApiError::Status(409)`
/// (see [`ApiError::is_conflict`]); an unknown row as 404.
pub async fn patch_row(api: &ApiClient, sheet_id: &str, row_index: i64, patch: &RowPatch) -> Result<RowPatched, ApiError> {
    api.patch(&row_endpoint(sheet_id, row_index), json_body(patch)?).await
}

/// Fetch the most recent changes to one row, newest first.
///
/// # Errors
///
/// Returns the underlying [`ApiError`] if the request fails.
pub async fn row_history(api: &ApiClient, sheet_id: &str, row_index: i64, limit: u32) -> Result<Vec<RowChange>, ApiError> {
    api.get(&row_history_endpoint(sheet_id, row_index, limit)).await
}
