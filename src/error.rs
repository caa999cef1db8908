//! Startup and serve errors for the host binary.

use std::num::ParseIntError;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort { value: String, source: ParseIntError },
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
    #[error("failed to bind: {0}")]
    Bind(std::io::Error),
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}
