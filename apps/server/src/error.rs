//! Mapping from domain errors to HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fxproxy_rates::RatesError;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Carries a [`RatesError`] across the handler boundary.
///
/// Validation failures are client errors; the collapsed upstream failure
/// maps to 503. The body is the error's display string, which for
/// [`RatesError::ApiCall`] is a fixed generic message.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] RatesError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            RatesError::InvalidBaseCurrency(_)
            | RatesError::InvalidDate(_)
            | RatesError::InvalidAmount => StatusCode::BAD_REQUEST,
            RatesError::ApiCall => StatusCode::SERVICE_UNAVAILABLE,
        };
        (status, self.0.to_string()).into_response()
    }
}
