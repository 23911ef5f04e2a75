//! Shipping quote and table-listing commands.

use crate::config::Config;
use crate::data;
use crate::format::Formatter;
use crate::shipping::{select_cheapest, Dimensions};
use anyhow::{bail, Result};
use tracing::info;

/// Quotes the cheapest eligible shipping method for a package.
pub fn quote(config: &Config, weight_grams: f64, dimensions: Dimensions) -> Result<String> {
    if weight_grams <= 0.0 {
        bail!("Weight must be positive (got {})", weight_grams);
    }

    let table = data::load_shipping_table(config.shipping_table.as_deref())?;
    let selection = select_cheapest(&table, weight_grams, &dimensions);

    if let Some(q) = selection.quote() {
        info!("Cheapest method for {}g: {} at {} JPY", weight_grams, q.method, q.price_jpy);
    }

    Ok(Formatter::new(config.format).format_selection(&selection))
}

/// Lists the configured shipping methods with their brackets.
pub fn list_methods(config: &Config) -> Result<String> {
    let table = data::load_shipping_table(config.shipping_table.as_deref())?;

    let mut lines = Vec::new();
    lines.push(format!(
        "{:<32} {:>12} {:>16} {:>10}",
        "Method", "Max weight", "Max L/W/H (cm)", "Price"
    ));
    lines.push(format!("{:-<32} {:->12} {:->16} {:->10}", "", "", "", ""));

    for option in table.iter() {
        let caps = match (option.max_length_cm, option.max_width_cm, option.max_height_cm) {
            (None, None, None) => "any".to_string(),
            (l, w, h) => format!("{}/{}/{}", cap_str(l), cap_str(w), cap_str(h)),
        };

        lines.push(format!(
            "{:<32} {:>11}g {:>16} {:>6} JPY",
            option.method, option.max_weight_grams, caps, option.price_jpy
        ));
    }

    Ok(lines.join("\n"))
}

/// Lists the configured marketplace category fees.
pub fn list_categories(config: &Config) -> Result<String> {
    let fee_options = data::load_category_fees(config.category_table.as_deref())?;

    let mut lines = Vec::new();
    lines.push(format!("{:<28} {:>8}  {}", "Label", "Fee", "Categories"));
    lines.push(format!("{:-<28} {:->8}  {:-<40}", "", "", ""));

    for option in &fee_options {
        lines.push(format!(
            "{:<28} {:>7}%  {}",
            option.label,
            option.value,
            option.categories.join(", ")
        ));
    }

    Ok(lines.join("\n"))
}

fn cap_str(cap: Option<f64>) -> String {
    cap.map(|c| format!("{}", c)).unwrap_or_else(|| "-".to_string())
}
