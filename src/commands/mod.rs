//! CLI command implementations.

pub mod calc;
pub mod rate;
pub mod shipping;

pub use calc::{CalcCommand, CalcInputs};
