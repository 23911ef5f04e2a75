//! Cheapest eligible shipping method selection.

use super::models::{Dimensions, ShippingOption, ShippingQuote, ShippingSelection, ShippingTable};

/// Selects the cheapest shipping method eligible for the given weight and
/// dimensions.
///
/// Eligibility requires the weight and every specified dimension cap to
/// accommodate the package. Among eligible options the minimum price wins;
/// ties go to the earlier entry in table order. Returns
/// [`ShippingSelection::NoneEligible`] when nothing fits — never a fallback
/// guess.
///
/// Callers must not invoke this with a non-positive weight; that state is
/// "not yet computable" and handled upstream.
pub fn select_cheapest(
    table: &ShippingTable,
    weight_grams: f64,
    dimensions: &Dimensions,
) -> ShippingSelection {
    let mut winner: Option<&ShippingOption> = None;

    for option in table.iter() {
        if !option.accepts(weight_grams, dimensions) {
            continue;
        }

        // Strict < keeps the first of equally-priced options.
        match winner {
            Some(best) if option.price_jpy < best.price_jpy => winner = Some(option),
            Some(_) => {}
            None => winner = Some(option),
        }
    }

    match winner {
        Some(option) => ShippingSelection::Selected(ShippingQuote {
            method: option.method.clone(),
            price_jpy: option.price_jpy,
        }),
        None => ShippingSelection::NoneEligible,
    }
}
