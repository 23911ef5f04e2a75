//! Static lookup data: the shipping rate table and the category fee table.
//!
//! Both documents are consumed read-only at startup, either from a configured
//! JSON file or from the bundled defaults.

use crate::calc::fees::CategoryFeeOption;
use crate::shipping::ShippingTable;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Bundled default shipping rate document.
pub const DEFAULT_SHIPPING_JSON: &str = include_str!("../data/shipping.json");

/// Bundled default category fee document.
pub const DEFAULT_CATEGORY_FEES_JSON: &str = include_str!("../data/category_fees.json");

/// Errors from loading the lookup documents.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {what}: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads the shipping rate table from `path`, or the bundled default when no
/// path is configured.
pub fn load_shipping_table(path: Option<&Path>) -> Result<ShippingTable, DataError> {
    let content = read_or_default(path, DEFAULT_SHIPPING_JSON)?;
    serde_json::from_str(&content)
        .map_err(|source| DataError::Parse { what: "shipping rate table", source })
}

/// Loads the category fee table from `path`, or the bundled default.
pub fn load_category_fees(path: Option<&Path>) -> Result<Vec<CategoryFeeOption>, DataError> {
    let content = read_or_default(path, DEFAULT_CATEGORY_FEES_JSON)?;
    serde_json::from_str(&content)
        .map_err(|source| DataError::Parse { what: "category fee table", source })
}

fn read_or_default(path: Option<&Path>, default: &str) -> Result<String, DataError> {
    match path {
        Some(path) => {
            debug!("Loading table from: {}", path.display());
            std::fs::read_to_string(path)
                .map_err(|source| DataError::Io { path: path.to_path_buf(), source })
        }
        None => {
            debug!("No table path configured, using bundled defaults");
            Ok(default.to_string())
        }
    }
}
