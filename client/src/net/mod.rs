//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the generic request helper, `accounts` and `spreadsheets` bind
//! concrete endpoints on top of it, and `types` defines the JSON payloads.

pub mod accounts;
pub mod api;
pub mod spreadsheets;
pub mod types;
