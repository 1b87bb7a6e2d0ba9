use std::sync::Arc;

use fxproxy_rates::{FxApiClient, FxApiConfig};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub fx_client: FxApiClient,
}

pub fn init_tracing() {
    let log_format = std::env::var("FXPROXY_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Compose the application state. The upstream client is the only
/// dependency; it is built once and shared by every request.
pub fn build_state(config: &Config) -> Arc<AppState> {
    let fx_client = FxApiClient::new(FxApiConfig {
        api_key: config.api_key.clone(),
        latest_url: config.latest_url.clone(),
        historical_url: config.historical_url.clone(),
        convert_url: config.convert_url.clone(),
    });

    Arc::new(AppState { fx_client })
}
