//! Spreadsheet page: create a sheet, browse a range of its rows, insert and
//! edit rows, and read a row's change history.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded like the profile page. All data comes from the REST API through
//! `net::spreadsheets`; nothing here is cached between visits.
//!
//! EDITING
//! =======
//! A cell edit is only built against a row that is currently loaded, and
//! carries that row's version as `expected_version`. If someone else changed
//! the row in the meantime the server answers 409 and the edit is dropped;
//! the user reloads and tries again.

#[cfg(test)]
#[path = "spreadsheet_test.rs"]
mod spreadsheet_test;

use std::collections::BTreeMap;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::net::api::ApiClient;
use crate::net::spreadsheets::{self, DEFAULT_HISTORY_LIMIT, DEFAULT_ROW_END, DEFAULT_ROW_START};
use crate::net::types::{Cell, CellChange, NewRow, Row, RowChange, RowPatch, columns};
use crate::routes::Page;
use crate::state::session::use_session;
use crate::util::auth::install_unauth_redirect;

fn validate_title_input(raw: &str) -> Result<String, &'static str> {
    let title = raw.trim();
    if title.is_empty() {
        return Err("Enter a title first.");
    }
    Ok(title.to_owned())
}

/// Parse a `start`/`end` pair, falling back to the default range for blanks.
fn parse_row_range(start: &str, end: &str) -> Result<(u32, u32), &'static str> {
    let parse = |raw: &str, default: u32| -> Result<u32, &'static str> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(default);
        }
        raw.parse::<u32>().map_err(|_| "Row numbers must be positive integers.")
    };
    let start = parse(start, DEFAULT_ROW_START)?;
    let end = parse(end, DEFAULT_ROW_END)?;
    if start == 0 || end < start {
        return Err("Row range must start at 1 and end after it starts.");
    }
    Ok((start, end))
}

fn parse_row_index(raw: &str) -> Result<i64, &'static str> {
    match raw.trim().parse::<i64>() {
        Ok(index) if index >= 1 => Ok(index),
        _ => Err("Row number must be a positive integer."),
    }
}

/// Column letters, upper-cased: `"a"` becomes `"A"`, `" aa "` becomes `"AA"`.
fn normalize_column(raw: &str) -> Result<String, &'static str> {
    let column = raw.trim();
    if column.is_empty() || !column.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err("Column must be letters, like A or AB.");
    }
    Ok(column.to_ascii_uppercase())
}

/// Blank input clears the cell.
fn parse_cell_input(raw: &str) -> Option<Cell> {
    if raw.trim().is_empty() { None } else { Some(Cell::from_input(raw)) }
}

fn build_new_row(row_index: i64, column: &str, raw: &str) -> NewRow {
    let cells = parse_cell_input(raw).map(|cell| (column.to_owned(), cell)).into_iter().collect();
    NewRow { row_index, cells }
}

fn build_cell_patch(
    rows: &[Row],
    row_index: i64,
    column: &str,
    raw: &str,
    user_id: Option<String>,
) -> Result<RowPatch, &'static str> {
    let row = rows
        .iter()
        .find(|r| r.row_index == row_index)
        .ok_or("Load the row before editing it.")?;
    let change = CellChange { old: row.cells.get(column).cloned(), new: parse_cell_input(raw) };
    if change.old == change.new {
        return Err("Cell already has that value.");
    }
    Ok(RowPatch {
        changes: BTreeMap::from([(column.to_owned(), change)]),
        user_id,
        expected_version: Some(row.version),
    })
}

/// Mirror a saved patch into the loaded rows.
fn apply_cell_patch(rows: &mut [Row], row_index: i64, patch: &RowPatch, version: i64) {
    let Some(row) = rows.iter_mut().find(|r| r.row_index == row_index) else {
        return;
    };
    for (column, change) in &patch.changes {
        match &change.new {
            Some(cell) => {
                row.cells.insert(column.clone(), cell.clone());
            }
            None => {
                row.cells.remove(column);
            }
        }
    }
    row.version = version;
}

/// Add an inserted row to the loaded rows, keeping them ordered by index.
fn insert_loaded_row(rows: &mut Vec<Row>, new_row: NewRow) {
    let at = rows.partition_point(|r| r.row_index < new_row.row_index);
    rows.insert(at, Row { row_index: new_row.row_index, cells: new_row.cells, version: 1 });
}

fn conflict_message(row_index: i64) -> String {
    format!("Row {row_index} changed since it was loaded; reload to edit.")
}

fn describe_change(change: &RowChange) -> String {
    let when = change.created_at.as_deref().unwrap_or("unknown time");
    match change.user_id.as_deref() {
        Some(user) => format!("{when}: {} by {user}", change.op_type),
        None => format!("{when}: {}", change.op_type),
    }
}

#[component]
pub fn SpreadsheetPage() -> impl IntoView {
    let session = use_session();
    let api = expect_context::<ApiClient>();
    install_unauth_redirect(Page::Spreadsheet, session, use_navigate());

    let title = RwSignal::new(String::new());
    let sheet_id = RwSignal::new(String::new());
    let range_start = RwSignal::new(String::new());
    let range_end = RwSignal::new(String::new());
    let rows = RwSignal::new(Vec::<Row>::new());
    let edit_row = RwSignal::new(String::new());
    let edit_column = RwSignal::new(String::new());
    let edit_value = RwSignal::new(String::new());
    let history = RwSignal::new(Vec::<RowChange>::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Sheet id plus parsed row/column from the edit form.
    let edit_target = move || -> Result<(String, i64, String), &'static str> {
        let id = sheet_id.get().trim().to_owned();
        if id.is_empty() {
            return Err("Enter a spreadsheet id first.");
        }
        let row_index = parse_row_index(&edit_row.get())?;
        let column = normalize_column(&edit_column.get())?;
        Ok((id, row_index, column))
    };

    let create_api = api.clone();
    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let title_value = match validate_title_input(&title.get()) {
            Ok(t) => t,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        let api = create_api.clone();
        leptos::task::spawn_local(async move {
            match spreadsheets::create_spreadsheet(&api, &title_value).await {
                Ok(sheet) => {
                    info.set(format!("Created \"{}\"", sheet.title));
                    sheet_id.set(sheet.id);
                    rows.set(Vec::new());
                    title.set(String::new());
                }
                Err(e) => info.set(format!("Create failed: {e}")),
            }
            busy.set(false);
        });
    };

    let load_api = api.clone();
    let on_load = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let id = sheet_id.get().trim().to_owned();
        if id.is_empty() {
            info.set("Enter a spreadsheet id first.".to_owned());
            return;
        }
        let (start, end) = match parse_row_range(&range_start.get(), &range_end.get()) {
            Ok(range) => range,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        let api = load_api.clone();
        leptos::task::spawn_local(async move {
            match spreadsheets::fetch_rows(&api, &id, start, end).await {
                Ok(loaded) => {
                    info.set(format!("Loaded {} rows", loaded.len()));
                    rows.set(loaded);
                    history.set(Vec::new());
                }
                Err(e) => info.set(format!("Load failed: {e}")),
            }
            busy.set(false);
        });
    };

    let save_api = api.clone();
    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let built = edit_target().and_then(|(id, row_index, column)| {
            let user_id = session.with(|s| s.username().map(str::to_owned));
            rows.with(|loaded| build_cell_patch(loaded, row_index, &column, &edit_value.get(), user_id))
                .map(|patch| (id, row_index, patch))
        });
        let (id, row_index, patch) = match built {
            Ok(target) => target,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        let api = save_api.clone();
        leptos::task::spawn_local(async move {
            match spreadsheets::patch_row(&api, &id, row_index, &patch).await {
                Ok(saved) => {
                    rows.update(|loaded| apply_cell_patch(loaded, row_index, &patch, saved.version));
                    info.set(format!("Saved row {row_index} (version {})", saved.version));
                }
                Err(e) if e.is_conflict() => info.set(conflict_message(row_index)),
                Err(e) => info.set(format!("Save failed: {e}")),
            }
            busy.set(false);
        });
    };

    let insert_api = api.clone();
    let on_insert = move |_: leptos::ev::MouseEvent| {
        if busy.get() {
            return;
        }
        let (id, row_index, column) = match edit_target() {
            Ok(target) => target,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        let new_row = build_new_row(row_index, &column, &edit_value.get());
        busy.set(true);
        let api = insert_api.clone();
        leptos::task::spawn_local(async move {
            match spreadsheets::insert_row(&api, &id, &new_row).await {
                Ok(inserted) => {
                    info.set(format!("Inserted row {}", inserted.row_index));
                    rows.update(|loaded| insert_loaded_row(loaded, new_row));
                }
                Err(e) => info.set(format!("Insert failed: {e}")),
            }
            busy.set(false);
        });
    };

    let on_history = move |_: leptos::ev::MouseEvent| {
        if busy.get() {
            return;
        }
        let id = sheet_id.get().trim().to_owned();
        if id.is_empty() {
            info.set("Enter a spreadsheet id first.".to_owned());
            return;
        }
        let row_index = match parse_row_index(&edit_row.get()) {
            Ok(index) => index,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match spreadsheets::row_history(&api, &id, row_index, DEFAULT_HISTORY_LIMIT).await {
                Ok(changes) => {
                    info.set(format!("Row {row_index}: {} changes", changes.len()));
                    history.set(changes);
                }
                Err(e) => info.set(format!("History failed: {e}")),
            }
            busy.set(false);
        });
    };

    let grid = move || {
        let rows = rows.get();
        let cols = columns(&rows);
        let header = cols.iter().map(|c| view! { <th>{c.clone()}</th> }).collect_view();
        let body = rows
            .iter()
            .map(|row| {
                let cells = cols
                    .iter()
                    .map(|c| {
                        let text = row.cells.get(c).map(|cell| cell.display()).unwrap_or_default();
                        view! { <td>{text}</td> }
                    })
                    .collect_view();
                view! {
                    <tr>
                        <th>{row.row_index}</th>
                        {cells}
                    </tr>
                }
            })
            .collect_view();
        view! {
            <table class="sheet-grid">
                <thead>
                    <tr>
                        <th></th>
                        {header}
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        }
    };

    view! {
        <div class="sheet-page">
            <Title text=Page::Spreadsheet.name()/>
            <h1>"Spreadsheets"</h1>
            <form class="sheet-form" on:submit=on_create>
                <input
                    type="text"
                    placeholder="New spreadsheet title"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || busy.get()>"Create"</button>
            </form>
            <form class="sheet-form" on:submit=on_load>
                <input
                    type="text"
                    placeholder="Spreadsheet id"
                    prop:value=move || sheet_id.get()
                    on:input=move |ev| sheet_id.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="1"
                    prop:value=move || range_start.get()
                    on:input=move |ev| range_start.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="100"
                    prop:value=move || range_end.get()
                    on:input=move |ev| range_end.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || busy.get()>"Load rows"</button>
            </form>
            <form class="sheet-form" on:submit=on_save>
                <input
                    type="text"
                    placeholder="Row"
                    prop:value=move || edit_row.get()
                    on:input=move |ev| edit_row.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Column"
                    prop:value=move || edit_column.get()
                    on:input=move |ev| edit_column.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Value"
                    prop:value=move || edit_value.get()
                    on:input=move |ev| edit_value.set(event_target_value(&ev))
                />
                <button type="submit" disabled=move || busy.get()>"Save cell"</button>
                <button type="button" disabled=move || busy.get() on:click=on_insert>"Insert row"</button>
                <button type="button" disabled=move || busy.get() on:click=on_history>"History"</button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="sheet-page__message">{move || info.get()}</p>
            </Show>
            {grid}
            <ul class="sheet-history">
                {move || {
                    history
                        .get()
                        .iter()
                        .map(|change| view! { <li>{describe_change(change)}</li> })
                        .collect_view()
                }}
            </ul>
            <a href=Page::Main.path()>"Back"</a>
        </div>
    }
}
