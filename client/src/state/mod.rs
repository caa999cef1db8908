//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session is the only shared state; page-local form state lives in
//! signals inside each page component.

pub mod session;
