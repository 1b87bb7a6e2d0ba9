//! FX proxy HTTP server.
//!
//! Thin backend in front of a third-party foreign-exchange rates provider:
//! validates query parameters, forwards the request upstream with the
//! configured credential, and returns the decoded payload.

pub mod api;
pub mod config;
pub mod error;
pub mod main_lib;

pub use main_lib::{build_state, AppState};
