//! Data models for shipping methods, package dimensions, and quotes.

use serde::{Deserialize, Serialize};

/// A single shipping method with its weight/dimension caps and price.
///
/// Mirrors one entry of the shipping rate document. Dimension caps are
/// optional; a missing cap means the method accepts any size.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingOption {
    /// Unique method label (e.g. "ePacket")
    pub method: String,
    /// Maximum accepted package weight in grams
    pub max_weight_grams: f64,
    /// Maximum length in cm, if the method caps it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length_cm: Option<f64>,
    /// Maximum width in cm, if the method caps it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width_cm: Option<f64>,
    /// Maximum height in cm, if the method caps it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_height_cm: Option<f64>,
    /// Shipping price in JPY
    #[serde(rename = "priceJPY")]
    pub price_jpy: f64,
}

impl ShippingOption {
    /// Creates an option with no dimension caps.
    pub fn new(method: impl Into<String>, max_weight_grams: f64, price_jpy: f64) -> Self {
        Self {
            method: method.into(),
            max_weight_grams,
            max_length_cm: None,
            max_width_cm: None,
            max_height_cm: None,
            price_jpy,
        }
    }

    /// Creates an option with all three dimension caps set.
    pub fn with_caps(
        method: impl Into<String>,
        max_weight_grams: f64,
        length_cm: f64,
        width_cm: f64,
        height_cm: f64,
        price_jpy: f64,
    ) -> Self {
        Self {
            method: method.into(),
            max_weight_grams,
            max_length_cm: Some(length_cm),
            max_width_cm: Some(width_cm),
            max_height_cm: Some(height_cm),
            price_jpy,
        }
    }

    /// Returns true if this method accepts the given weight and dimensions.
    ///
    /// A dimension of zero means "not yet entered" and passes every cap.
    pub fn accepts(&self, weight_grams: f64, dimensions: &Dimensions) -> bool {
        if weight_grams > self.max_weight_grams {
            return false;
        }

        within_cap(dimensions.length_cm, self.max_length_cm)
            && within_cap(dimensions.width_cm, self.max_width_cm)
            && within_cap(dimensions.height_cm, self.max_height_cm)
    }
}

fn within_cap(value_cm: f64, cap_cm: Option<f64>) -> bool {
    match cap_cm {
        Some(cap) => value_cm <= cap,
        None => true,
    }
}

/// Ordered shipping rate table. Document order is the priority order used
/// to break price ties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShippingTable {
    options: Vec<ShippingOption>,
}

impl ShippingTable {
    /// Creates a table from options, preserving order.
    pub fn new(options: Vec<ShippingOption>) -> Self {
        Self { options }
    }

    /// Iterates the options in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &ShippingOption> {
        self.options.iter()
    }

    /// Returns the number of options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns true if the table has no options.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl From<Vec<ShippingOption>> for ShippingTable {
    fn from(options: Vec<ShippingOption>) -> Self {
        Self::new(options)
    }
}

/// Package dimensions in centimeters. Zero means "not yet entered".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length_cm: f64,
    pub width_cm: f64,
    pub height_cm: f64,
}

impl Dimensions {
    /// Creates dimensions from length, width, and height.
    pub fn new(length_cm: f64, width_cm: f64, height_cm: f64) -> Self {
        Self { length_cm, width_cm, height_cm }
    }

    /// Returns true if no dimension has been entered yet.
    pub fn is_unset(&self) -> bool {
        self.length_cm == 0.0 && self.width_cm == 0.0 && self.height_cm == 0.0
    }
}

/// A selected shipping method and its price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingQuote {
    /// Method label
    pub method: String,
    /// Shipping price in JPY
    pub price_jpy: f64,
}

/// Outcome of shipping selection: a winning quote, or no eligible method.
///
/// "Not yet computed" is represented upstream as `Option<ShippingSelection>`,
/// distinct from `NoneEligible`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ShippingSelection {
    Selected(ShippingQuote),
    NoneEligible,
}

impl ShippingSelection {
    /// Returns the winning quote, if any method was eligible.
    pub fn quote(&self) -> Option<&ShippingQuote> {
        match self {
            ShippingSelection::Selected(quote) => Some(quote),
            ShippingSelection::NoneEligible => None,
        }
    }

    /// Returns true if no method was eligible.
    pub fn is_none_eligible(&self) -> bool {
        matches!(self, ShippingSelection::NoneEligible)
    }
}
