//! HTTP client for the upstream FX rates provider.

use std::time::Duration;

use reqwest::Client;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::errors::RatesError;
use crate::models::{ConversionResponse, RatesResponse};

/// Upstream endpoints and credential, read from configuration once at
/// startup and never mutated.
#[derive(Debug, Clone)]
pub struct FxApiConfig {
    /// Credential appended to every request as the `api_key` parameter.
    pub api_key: String,
    pub latest_url: String,
    pub historical_url: String,
    pub convert_url: String,
}

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the upstream rates provider.
///
/// Callers must have validated currency codes, dates, and amounts before
/// reaching this type: values are substituted into the request URL without
/// percent-encoding, which is safe only for the alphanumeric inputs the
/// validator admits.
pub struct FxApiClient {
    client: Client,
    config: FxApiConfig,
}

impl FxApiClient {
    pub fn new(config: FxApiConfig) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    /// Current rates for `base`.
    pub async fn latest_rates(&self, base: &str) -> Result<RatesResponse, RatesError> {
        let url = format!(
            "{}?base={}&api_key={}",
            self.config.latest_url, base, self.config.api_key
        );
        self.fetch(&url).await
    }

    /// Rates for `base` on a past `date`, restricted to the given
    /// comma-separated `symbols`.
    pub async fn historical_rates(
        &self,
        base: &str,
        date: &str,
        symbols: &str,
    ) -> Result<RatesResponse, RatesError> {
        let url = format!(
            "{}?base={}&date={}&symbols={}&api_key={}",
            self.config.historical_url, base, date, symbols, self.config.api_key
        );
        self.fetch(&url).await
    }

    /// Convert `amount` of `from` into `to`.
    ///
    /// `Decimal` renders fixed-point, so the amount never reaches the
    /// upstream in scientific notation.
    pub async fn convert(
        &self,
        from: &str,
        to: &str,
        amount: Decimal,
    ) -> Result<ConversionResponse, RatesError> {
        let url = format!(
            "{}?from={}&to={}&amount={}&api_key={}",
            self.config.convert_url, from, to, amount, self.config.api_key
        );
        self.fetch(&url).await
    }

    /// GET `url` and decode the JSON body.
    ///
    /// Every failure mode - connect error, non-success status, body read,
    /// decode - collapses into [`RatesError::ApiCall`]. The cause is
    /// logged here and goes no further.
    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, RatesError> {
        debug!(%url, "fetching from upstream");

        let response = self.client.get(url).send().await.map_err(|e| {
            error!(%url, cause = %e, "upstream request failed");
            RatesError::ApiCall
        })?;

        let status = response.status();
        if !status.is_success() {
            error!(%url, %status, "upstream returned non-success status");
            return Err(RatesError::ApiCall);
        }

        response.json::<T>().await.map_err(|e| {
            error!(%url, cause = %e, "failed to decode upstream body");
            RatesError::ApiCall
        })
    }
}
