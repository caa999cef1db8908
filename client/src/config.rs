//! API base URL configuration.
//!
//! `API_URL` is captured at build time so the WASM bundle carries it. Native
//! builds (SSR, tests) also honor the variable from the process environment,
//! which takes precedence over the build-time value.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Environment variable selecting the API base URL.
pub const API_URL_VAR: &str = "API_URL";

/// Base URL used when `API_URL` is unset or empty.
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: resolve_base_url(Some(base_url)) }
    }

    /// Build config from `API_URL`, falling back to [`DEFAULT_API_URL`].
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Ok(runtime) = std::env::var(API_URL_VAR) {
                if !runtime.trim().is_empty() {
                    return Self { base_url: resolve_base_url(Some(&runtime)) };
                }
            }
        }
        Self { base_url: resolve_base_url(option_env!("API_URL")) }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_URL.to_owned() }
    }
}

fn resolve_base_url(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(value) if !value.is_empty() => value.trim_end_matches('/').to_owned(),
        _ => DEFAULT_API_URL.to_owned(),
    }
}
