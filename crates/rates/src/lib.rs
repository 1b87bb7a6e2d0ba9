//! FX Proxy Rates Crate
//!
//! Domain layer for the FX proxy backend: the supported-currency reference
//! set, pure request validation, the response models, the error taxonomy,
//! and the HTTP client for the upstream rates provider.
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |    HTTP Edge     | --> |    Validator     |  (currency / date / amount)
//! +------------------+     +------------------+
//!          |
//!          v
//! +------------------+     +------------------+
//! |   FxApiClient    | --> |     Upstream     |  (GET + api_key, JSON)
//! +------------------+     +------------------+
//!          |
//!          v
//! +------------------+
//! |  RatesResponse / |
//! | ConversionResponse|
//! +------------------+
//! ```
//!
//! Validation happens exactly once, at the edge, before the client is
//! called; the client assumes validated inputs.

pub mod client;
pub mod currencies;
pub mod errors;
pub mod models;
pub mod validate;

pub use client::{FxApiClient, FxApiConfig};
pub use errors::RatesError;
pub use models::{ConversionResponse, RatesResponse};
