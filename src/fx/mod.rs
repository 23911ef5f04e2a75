//! Live GBP to JPY exchange-rate source.

pub mod client;

pub use client::{FxClient, FxError, RateSource};
