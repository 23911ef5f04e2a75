//! margin-calc - Profit-margin calculator for Japan-to-UK resellers
//!
//! Selects the cheapest eligible shipping method, classifies UK VAT
//! liability against the 135 GBP threshold, and produces a full profit
//! breakdown from a single immutable input snapshot.

pub mod calc;
pub mod commands;
pub mod config;
pub mod data;
pub mod format;
pub mod fx;
pub mod shipping;

pub use calc::{evaluate, CalcSettings, Evaluation, InputSnapshot};
pub use config::Config;
pub use shipping::{Dimensions, ShippingOption, ShippingTable};
