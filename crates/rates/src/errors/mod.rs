//! Error types for FX proxy operations.

use thiserror::Error;

/// Errors that can occur while validating a request or calling the
/// upstream rates provider.
///
/// The first three variants are client-input failures and carry the
/// message shown to the caller. [`RatesError::ApiCall`] is the single kind
/// every upstream failure collapses into; its display string is the entire
/// user-visible message, so transport detail never leaks past the log.
#[derive(Error, Debug)]
pub enum RatesError {
    /// The currency code is not in the supported set.
    #[error("Invalid currency: {0}")]
    InvalidBaseCurrency(String),

    /// The date is not a real calendar date in `YYYY-MM-DD` form.
    #[error("Invalid date format. Use YYYY-MM-DD: {0}")]
    InvalidDate(String),

    /// The conversion amount is below the minimum of 1.
    #[error("Amount must be at least 1.")]
    InvalidAmount,

    /// The upstream call failed: network, status, body, or decode.
    #[error("Failed to fetch data from API")]
    ApiCall,
}
