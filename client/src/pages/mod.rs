//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! One module per entry in `routes::Page`. Each page reads the session and
//! API client from context.

pub mod login;
pub mod main_page;
pub mod profile;
pub mod register;
pub mod spreadsheet;
