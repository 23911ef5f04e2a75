//! Shipping rate table and cheapest-method selection.

pub mod models;
pub mod selector;

pub use models::{Dimensions, ShippingOption, ShippingQuote, ShippingSelection, ShippingTable};
pub use selector::select_cheapest;
