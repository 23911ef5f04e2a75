//! Marketplace fee and profit arithmetic.
//!
//! Four independent pure functions over JPY amounts, composed in sequence by
//! the pipeline: category fee, actual (landed) cost, gross profit, margin.

use serde::{Deserialize, Serialize};

/// A marketplace category fee entry from the fee document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryFeeOption {
    /// Display label (e.g. "Electronics")
    pub label: String,
    /// Fee percentage, 0-100
    pub value: f64,
    /// Marketplace categories this fee applies to
    pub categories: Vec<String>,
}

/// Resolves a fee percentage from a category label or category name.
///
/// Matches case-insensitively against each option's label first, then its
/// category list.
pub fn resolve_fee_percent(options: &[CategoryFeeOption], name: &str) -> Option<f64> {
    let needle = name.trim().to_lowercase();

    options
        .iter()
        .find(|opt| {
            opt.label.to_lowercase() == needle
                || opt.categories.iter().any(|c| c.to_lowercase() == needle)
        })
        .map(|opt| opt.value)
}

/// Marketplace commission in JPY: `selling_price * fee_percent / 100`.
pub fn category_fee(selling_price: f64, fee_percent: f64) -> f64 {
    selling_price * fee_percent / 100.0
}

/// Landed cost in JPY: purchase cost plus shipping plus marketplace fee.
pub fn actual_cost(cost_price: f64, shipping_jpy: f64, category_fee_jpy: f64) -> f64 {
    cost_price + shipping_jpy + category_fee_jpy
}

/// Gross profit in JPY: selling price minus landed cost.
pub fn gross_profit(selling_price: f64, actual_cost: f64) -> f64 {
    selling_price - actual_cost
}

/// Profit margin as a ratio of the selling price.
///
/// A zero selling price yields 0.0 rather than dividing by zero.
pub fn profit_margin(gross_profit: f64, selling_price: f64) -> f64 {
    if selling_price == 0.0 {
        0.0
    } else {
        gross_profit / selling_price
    }
}
