//! HTTP client for the exchange-rate API.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Default open exchange-rate endpoint (no API key required).
pub const DEFAULT_FX_BASE: &str = "https://open.er-api.com";

/// Errors from the exchange-rate client.
#[derive(Debug, Error)]
pub enum FxError {
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("exchange rate service returned status {0}")]
    Status(reqwest::StatusCode),
    #[error("response contained no usable JPY rate")]
    MissingRate,
}

/// Trait for exchange-rate lookups - enables mocking for tests.
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Fetches the current GBP to JPY rate.
    async fn gbp_to_jpy(&self) -> Result<f64, FxError>;
}

/// Exchange-rate HTTP client.
pub struct FxClient {
    client: Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct RatesResponse {
    rates: HashMap<String, f64>,
}

impl FxClient {
    /// Creates a client against the default endpoint.
    pub fn new() -> Result<Self, FxError> {
        Self::with_base_url(DEFAULT_FX_BASE.to_string())
    }

    /// Creates a client with a custom base URL (for testing).
    pub fn with_base_url(base_url: String) -> Result<Self, FxError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl RateSource for FxClient {
    async fn gbp_to_jpy(&self) -> Result<f64, FxError> {
        let url = format!("{}/v6/latest/GBP", self.base_url);
        debug!("GET {}", url);

        let response = self.client.get(&url).header("Accept", "application/json").send().await?;

        if !response.status().is_success() {
            return Err(FxError::Status(response.status()));
        }

        let body: RatesResponse = response.json().await?;

        let rate = body
            .rates
            .get("JPY")
            .copied()
            .filter(|r| r.is_finite() && *r > 0.0)
            .ok_or(FxError::MissingRate)?;

        info!("Current GBP/JPY rate: {}", rate);
        Ok(rate)
    }
}
