//! Full recomputation pipeline over an immutable input snapshot.
//!
//! The CLI (or any caller) builds an [`InputSnapshot`] from whatever inputs
//! are currently known and calls [`evaluate`]. Everything derived is
//! recomputed from scratch in dependency order: shipping selection, VAT
//! classification, fee arithmetic, final detail. Absent inputs propagate as
//! `None` ("pending") rather than as misleading zeros.

use super::detail::{final_profit_detail, DutiableBase, FinalProfitDetail, FinalProfitParams};
use super::fees;
use super::vat;
use crate::shipping::{select_cheapest, Dimensions, ShippingSelection, ShippingTable};
use serde::{Deserialize, Serialize};

/// The current user inputs. All values optional; `None` means "not yet
/// entered". Replaced wholesale on any change, never partially mutated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSnapshot {
    /// Purchase cost in JPY
    pub cost_price: Option<f64>,
    /// Selling price in JPY
    pub selling_price: Option<f64>,
    /// Package weight in grams
    pub weight_grams: Option<f64>,
    /// Package dimensions in cm (zero components count as unset)
    pub dimensions: Dimensions,
    /// Marketplace category fee in percent
    pub category_fee_percent: Option<f64>,
    /// Current GBP to JPY exchange rate
    pub exchange_rate_gbp_to_jpy: Option<f64>,
}

/// Fixed calculation parameters, normally sourced from configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CalcSettings {
    /// Customs duty rate in percent
    pub customs_rate: f64,
    /// Optional additional platform fee rate in percent
    pub platform_rate: f64,
    /// VAT rate in percent
    pub vat_rate: f64,
    /// Which costs the customs duty is computed on
    pub dutiable_base: DutiableBase,
}

impl Default for CalcSettings {
    fn default() -> Self {
        Self {
            customs_rate: 4.0,
            platform_rate: 0.0,
            vat_rate: 20.0,
            dutiable_base: DutiableBase::default(),
        }
    }
}

/// The pre-tax calculation results, recomputed in full on every evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcBreakdown {
    pub method: String,
    pub shipping_jpy: f64,
    pub category_fee_jpy: f64,
    pub actual_cost_jpy: f64,
    pub gross_profit_jpy: f64,
    pub profit_margin: f64,
}

/// Everything the pipeline derives from one snapshot.
///
/// `shipping: None` means "not yet computable" (no weight entered), which is
/// distinct from `Some(NoneEligible)`. The same convention applies to the
/// breakdown and the final detail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    // Pending values are omitted from serialized output; a present-but-null
    // shipping entry therefore always means "no eligible method".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping: Option<ShippingSelection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_gbp: Option<f64>,
    pub vat_applies: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<CalcBreakdown>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<FinalProfitDetail>,
}

/// Recomputes all derived values from the snapshot.
///
/// Pure and idempotent: identical snapshots yield identical evaluations.
pub fn evaluate(
    table: &ShippingTable,
    snapshot: &InputSnapshot,
    settings: &CalcSettings,
) -> Evaluation {
    // Shipping needs a positive weight; anything else is pending.
    let shipping = match snapshot.weight_grams {
        Some(weight) if weight > 0.0 => {
            Some(select_cheapest(table, weight, &snapshot.dimensions))
        }
        _ => None,
    };

    // VAT classification needs the selling price in GBP.
    let price_gbp = match (snapshot.selling_price, snapshot.exchange_rate_gbp_to_jpy) {
        (Some(selling), Some(rate)) if rate > 0.0 => Some(selling / rate),
        _ => None,
    };
    let vat_applies = price_gbp.map(vat::is_under_threshold).unwrap_or(false);

    let breakdown = compute_breakdown(snapshot, shipping.as_ref());

    let detail = breakdown.as_ref().map(|b| {
        final_profit_detail(&FinalProfitParams {
            selling_price: snapshot.selling_price.unwrap_or(0.0),
            cost_price: snapshot.cost_price.unwrap_or(0.0),
            shipping_jpy: b.shipping_jpy,
            category_fee_jpy: b.category_fee_jpy,
            customs_rate: settings.customs_rate,
            platform_rate: settings.platform_rate,
            vat_rate: settings.vat_rate,
            include_vat: vat_applies,
            exchange_rate_gbp_to_jpy: snapshot.exchange_rate_gbp_to_jpy,
            dutiable_base: settings.dutiable_base,
        })
    });

    Evaluation { shipping, price_gbp, vat_applies, breakdown, detail }
}

fn compute_breakdown(
    snapshot: &InputSnapshot,
    shipping: Option<&ShippingSelection>,
) -> Option<CalcBreakdown> {
    let selling = snapshot.selling_price?;
    let cost = snapshot.cost_price?;
    let fee_percent = snapshot.category_fee_percent?;
    let quote = shipping?.quote()?;

    let category_fee_jpy = fees::category_fee(selling, fee_percent);
    let actual_cost_jpy = fees::actual_cost(cost, quote.price_jpy, category_fee_jpy);
    let gross_profit_jpy = fees::gross_profit(selling, actual_cost_jpy);
    let profit_margin = fees::profit_margin(gross_profit_jpy, selling);

    Some(CalcBreakdown {
        method: quote.method.clone(),
        shipping_jpy: quote.price_jpy,
        category_fee_jpy,
        actual_cost_jpy,
        gross_profit_jpy,
        profit_margin,
    })
}
