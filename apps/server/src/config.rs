//! Server configuration, read once from the environment at startup.

use anyhow::Context;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Immutable process-wide configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Upstream credential, forwarded as the `api_key` query parameter.
    pub api_key: String,
    pub latest_url: String,
    pub historical_url: String,
    pub convert_url: String,
}

impl Config {
    /// Load configuration from the environment. A `.env` file is honored
    /// when present. The four upstream settings are required; startup
    /// fails with the missing variable named.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            listen_addr: std::env::var("FXPROXY_LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
            api_key: required("CURRENCY_API_KEY")?,
            latest_url: required("CURRENCY_API_LATEST_URL")?,
            historical_url: required("CURRENCY_API_HISTORICAL_URL")?,
            convert_url: required("CURRENCY_API_CONVERT_URL")?,
        })
    }
}

fn required(name: &str) -> anyhow::Result<String> {
    std::env::var(name).with_context(|| format!("missing required environment variable {name}"))
}
