//! UK low-value-consignment VAT threshold classification.

/// The UK low-value consignment threshold in GBP. Consignments at or below
/// this value are VAT-liable at the point of sale.
pub const UK_VAT_THRESHOLD_GBP: f64 = 135.0;

/// Returns true if the consignment value falls at or under the 135 GBP
/// threshold.
///
/// The caller converts JPY to GBP with the current exchange rate; this is a
/// plain comparison with no rounding. When the GBP value cannot be computed
/// (no selling price or no rate), the pipeline classifies VAT as not
/// applicable instead of calling this.
pub fn is_under_threshold(price_gbp: f64) -> bool {
    price_gbp <= UK_VAT_THRESHOLD_GBP
}
