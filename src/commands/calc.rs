//! Full profit-breakdown command.

use crate::calc::fees::resolve_fee_percent;
use crate::calc::pipeline::{evaluate, InputSnapshot};
use crate::config::Config;
use crate::data;
use crate::format::Formatter;
use crate::fx::{FxClient, RateSource};
use crate::shipping::Dimensions;
use anyhow::{bail, Context, Result};
use tracing::{debug, info, warn};

/// Raw user inputs for one calculation. Anything left `None` flows through
/// the pipeline as "pending".
#[derive(Debug, Clone, Default)]
pub struct CalcInputs {
    /// Purchase cost in JPY
    pub cost_price: Option<f64>,
    /// Selling price in JPY
    pub selling_price: Option<f64>,
    /// Package weight in grams
    pub weight_grams: Option<f64>,
    /// Package dimensions in cm
    pub dimensions: Dimensions,
    /// Category label (or category name) to look up in the fee table
    pub category: Option<String>,
    /// Direct fee percentage, overriding the category lookup
    pub fee_percent: Option<f64>,
    /// Fixed GBP to JPY rate, skipping the live fetch
    pub rate: Option<f64>,
}

/// Executes a full profit breakdown.
pub struct CalcCommand {
    config: Config,
}

impl CalcCommand {
    /// Creates a new calc command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Executes the calculation, fetching a live rate when needed.
    pub async fn execute(&self, inputs: CalcInputs) -> Result<String> {
        let client = FxClient::with_base_url(self.config.fx_base_url.clone())
            .context("Failed to create exchange-rate client")?;

        self.execute_with_rate_source(&client, inputs).await
    }

    /// Executes the calculation with a provided rate source (for testing).
    pub async fn execute_with_rate_source(
        &self,
        source: &impl RateSource,
        inputs: CalcInputs,
    ) -> Result<String> {
        let table = data::load_shipping_table(self.config.shipping_table.as_deref())?;
        let fee_options = data::load_category_fees(self.config.category_table.as_deref())?;

        // Resolve the fee percentage: explicit override first, then lookup.
        let category_fee_percent = match (&inputs.fee_percent, &inputs.category) {
            (Some(percent), _) => Some(*percent),
            (None, Some(name)) => match resolve_fee_percent(&fee_options, name) {
                Some(percent) => Some(percent),
                None => {
                    let labels: Vec<&str> =
                        fee_options.iter().map(|o| o.label.as_str()).collect();
                    bail!("Unknown category: {}. Known labels: {}", name, labels.join(", "));
                }
            },
            (None, None) => None,
        };

        // Rate resolution: explicit value, else live fetch unless offline.
        // A failed fetch degrades to "rate unknown" rather than aborting;
        // the pipeline then reports VAT as not applicable.
        let exchange_rate = match inputs.rate {
            Some(rate) => Some(rate),
            None if self.config.offline => {
                debug!("Offline mode, skipping rate fetch");
                None
            }
            None => match source.gbp_to_jpy().await {
                Ok(rate) => Some(rate),
                Err(err) => {
                    warn!("Rate fetch failed, continuing without VAT figures: {}", err);
                    None
                }
            },
        };

        let snapshot = InputSnapshot {
            cost_price: inputs.cost_price,
            selling_price: inputs.selling_price,
            weight_grams: inputs.weight_grams,
            dimensions: inputs.dimensions,
            category_fee_percent,
            exchange_rate_gbp_to_jpy: exchange_rate,
        };

        let evaluation = evaluate(&table, &snapshot, &self.config.calc_settings());

        if let Some(breakdown) = &evaluation.breakdown {
            info!(
                "Gross profit {:.0} JPY via {} (margin {:.1}%)",
                breakdown.gross_profit_jpy,
                breakdown.method,
                breakdown.profit_margin * 100.0
            );
        }

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_evaluation(&evaluation))
    }
}
