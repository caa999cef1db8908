//! # noexcel-client
//!
//! Leptos + WASM frontend for the NoExcel spreadsheet service.
//!
//! This crate contains the route table, pages, the session store, and the
//! REST helper. It is rendered on the server (`ssr`) and hydrated in the
//! browser (`hydrate`).

pub mod app;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
