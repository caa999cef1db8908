//! Generic JSON request helper for the REST API.
//!
//! Browser (hydrate): requests go through `gloo-net`.
//! Native (SSR, tests): requests go through `reqwest`.
//!
//! ERROR HANDLING
//! ==============
//! A non-2xx status is reported as [`ApiError::Status`] and is not recovered
//! here. There is no retry, timeout or cancellation; callers decide how to
//! surface failures. The session token is not attached to requests.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;

use leptos::prelude::{provide_context, use_context};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ApiConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("API error: {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response body: {0}")]
    Decode(String),
    #[error("invalid request body: {0}")]
    Encode(String),
}

impl ApiError {
    /// HTTP status for [`ApiError::Status`], `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(status) => Some(*status),
            Self::Network(_) | Self::Decode(_) | Self::Encode(_) => None,
        }
    }

    /// The server rejected a write because the row changed since it was read.
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }
}

/// Serialize a typed payload into a request body.
///
/// # Errors
///
/// Returns [`ApiError::Encode`] if `value` cannot be represented as JSON.
pub fn json_body<T: Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Encode(e.to_string()))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Patch,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
        })
    }
}

/// Per-request options. The default is a bare `GET`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<serde_json::Value>,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post(body: serde_json::Value) -> Self {
        Self { method: Method::Post, body: Some(body) }
    }

    pub fn patch(body: serde_json::Value) -> Self {
        Self { method: Method::Patch, body: Some(body) }
    }
}

/// Stateless client bound to one base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    #[cfg(not(feature = "hydrate"))]
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            base_url: config.base_url,
            #[cfg(not(feature = "hydrate"))]
            http: reqwest::Client::new(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    /// Use a preconfigured `reqwest` client for the native transport.
    #[cfg(not(feature = "hydrate"))]
    pub fn with_http_client(config: ApiConfig, http: reqwest::Client) -> Self {
        Self { base_url: config.base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a request to `base_url + endpoint` and decode the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] for a non-2xx response,
    /// [`ApiError::Network`] if the request could not be sent, and
    /// [`ApiError::Decode`] if the body is not the expected JSON.
    pub async fn request<T: DeserializeOwned>(&self, endpoint: &str, options: &RequestOptions) -> Result<T, ApiError> {
        let url = endpoint_url(&self.base_url, endpoint);
        let result = self.send(&url, options).await;
        if let Err(e) = &result {
            log::warn!("{} {url} failed: {e}", options.method);
        }
        result
    }

    /// `GET base_url + endpoint`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        self.request(endpoint, &RequestOptions::get()).await
    }

    /// `POST base_url + endpoint` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn post<T: DeserializeOwned>(&self, endpoint: &str, body: serde_json::Value) -> Result<T, ApiError> {
        self.request(endpoint, &RequestOptions::post(body)).await
    }

    /// `PATCH base_url + endpoint` with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn patch<T: DeserializeOwned>(&self, endpoint: &str, body: serde_json::Value) -> Result<T, ApiError> {
        self.request(endpoint, &RequestOptions::patch(body)).await
    }

    #[cfg(feature = "hydrate")]
    async fn send<T: DeserializeOwned>(&self, url: &str, options: &RequestOptions) -> Result<T, ApiError> {
        use gloo_net::http::Request;

        let builder = match options.method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
            Method::Patch => Request::patch(url),
        };
        let sent = match &options.body {
            Some(body) => {
                builder
                    .json(body)
                    .map_err(|e| ApiError::Encode(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        };
        let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }

    #[cfg(not(feature = "hydrate"))]
    async fn send<T: DeserializeOwned>(&self, url: &str, options: &RequestOptions) -> Result<T, ApiError> {
        let method = match options.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
        };
        let mut builder = self.http.request(method, url);
        if let Some(body) = &options.body {
            builder = builder.json(body);
        }
        let resp = builder.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Provide the app-wide [`ApiClient`] unless an outer scope already did.
///
/// The SSR host provides one shared client per process; in the browser the
/// client is built once when the app mounts.
pub fn provide_api_client() {
    if use_context::<ApiClient>().is_none() {
        provide_context(ApiClient::from_env());
    }
}

fn endpoint_url(base_url: &str, endpoint: &str) -> String {
    format!("{base_url}{endpoint}")
}
