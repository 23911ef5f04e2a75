//! Live exchange-rate command.

use crate::config::{Config, OutputFormat};
use crate::fx::{FxClient, RateSource};
use anyhow::{Context, Result};

/// Fetches and formats the current GBP to JPY rate.
pub async fn current_rate(config: &Config) -> Result<String> {
    let client = FxClient::with_base_url(config.fx_base_url.clone())
        .context("Failed to create exchange-rate client")?;

    current_rate_with_source(&client, config.format).await
}

/// Fetches the rate from a provided source (for testing).
pub async fn current_rate_with_source(
    source: &impl RateSource,
    format: OutputFormat,
) -> Result<String> {
    let rate = source.gbp_to_jpy().await.context("Failed to fetch exchange rate")?;

    Ok(match format {
        OutputFormat::Json => serde_json::json!({ "gbp_to_jpy": rate }).to_string(),
        _ => format!("GBP/JPY: {:.2}", rate),
    })
}
