//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host has no API of its own. It renders the Leptos app for every page in
//! the client route table, serves the compiled WASM/CSS bundle under `/pkg`,
//! and answers a health check. Spreadsheet and account requests go from the
//! browser straight to the API base URL configured in the client.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use noexcel_client::net::api::ApiClient;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;

/// Routes that do not depend on Leptos configuration.
pub fn health_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Context hook that hands every SSR render the same [`ApiClient`].
///
/// `App` only builds its own client when none was provided, so renders reuse
/// this one instead of re-reading `API_URL` per request.
pub fn api_context(api: ApiClient) -> impl Fn() + Clone + Send + Sync + 'static {
    move || provide_context(api.clone())
}

/// Leptos SSR app + static assets + health check.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app() -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::LeptosConfig(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(noexcel_client::app::App);
    let api = ApiClient::from_env();
    tracing::info!(api_url = api.base_url(), "rendering against API");

    let leptos_router = Router::new()
        .leptos_routes_with_context(&leptos_options, routes, api_context(api), {
            let opts = leptos_options.clone();
            move || noexcel_client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(health_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
