//! Profit calculation pipeline: fee arithmetic, VAT classification, and the
//! final net-profit breakdown.

pub mod detail;
pub mod fees;
pub mod pipeline;
pub mod vat;

pub use detail::{final_profit_detail, DutiableBase, FinalProfitDetail, FinalProfitParams};
pub use fees::{actual_cost, category_fee, gross_profit, profit_margin, CategoryFeeOption};
pub use pipeline::{evaluate, CalcBreakdown, CalcSettings, Evaluation, InputSnapshot};
pub use vat::{is_under_threshold, UK_VAT_THRESHOLD_GBP};
