//! Account registration binding.
//!
//! Only registration talks to the server; sign-in stays local (see
//! `state::session`).

#[cfg(test)]
#[path = "accounts_test.rs"]
mod accounts_test;

use super::api::{ApiClient, ApiError};
use super::types::RegisteredUser;

/// Register `username` with `password` via `POST /register`.
///
/// # Errors
///
/// Returns [`ApiError::Status`] with 400 when the username is taken or the
/// server rejects the credentials, or the underlying transport error.
pub async fn register(api: &ApiClient, username: &str, password: &str) -> Result<RegisteredUser, ApiError> {
    api.post("/register", serde_json::json!({ "username": username, "password": password }))
        .await
}
