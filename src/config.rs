//! Configuration management with TOML, environment variables, and CLI overrides.

use crate::calc::detail::DutiableBase;
use crate::calc::pipeline::CalcSettings;
use crate::fx::client::DEFAULT_FX_BASE;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to a shipping rate table JSON file (bundled defaults when unset)
    #[serde(default)]
    pub shipping_table: Option<PathBuf>,

    /// Path to a category fee table JSON file (bundled defaults when unset)
    #[serde(default)]
    pub category_table: Option<PathBuf>,

    /// Customs duty rate in percent
    #[serde(default = "default_customs_rate")]
    pub customs_rate: f64,

    /// Optional additional platform fee rate in percent
    #[serde(default)]
    pub platform_rate: f64,

    /// VAT rate in percent
    #[serde(default = "default_vat_rate")]
    pub vat_rate: f64,

    /// Which costs the customs duty is computed on
    #[serde(default)]
    pub dutiable_base: DutiableBase,

    /// Base URL of the exchange-rate endpoint
    #[serde(default = "default_fx_base_url")]
    pub fx_base_url: String,

    /// Skip the live rate fetch entirely
    #[serde(default)]
    pub offline: bool,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_customs_rate() -> f64 {
    4.0
}

fn default_vat_rate() -> f64 {
    20.0
}

fn default_fx_base_url() -> String {
    DEFAULT_FX_BASE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            shipping_table: None,
            category_table: None,
            customs_rate: default_customs_rate(),
            platform_rate: 0.0,
            vat_rate: default_vat_rate(),
            dutiable_base: DutiableBase::default(),
            fx_base_url: default_fx_base_url(),
            offline: false,
            format: OutputFormat::Table,
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        // 1. Explicit path takes precedence
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        // 2. Try current directory
        let local_config = Path::new("config.toml");
        if local_config.exists() {
            debug!("Found config.toml in current directory");
            return Self::from_file(local_config);
        }

        // 3. Try XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("margin-calc").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        // 4. Return default config
        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides.
    pub fn with_env(mut self) -> Self {
        if let Ok(url) = std::env::var("MARGIN_FX_URL") {
            self.fx_base_url = url;
        }

        if let Ok(rate) = std::env::var("MARGIN_CUSTOMS_RATE") {
            if let Ok(r) = rate.parse() {
                self.customs_rate = r;
            }
        }

        if let Ok(rate) = std::env::var("MARGIN_VAT_RATE") {
            if let Ok(r) = rate.parse() {
                self.vat_rate = r;
            }
        }

        if std::env::var("MARGIN_OFFLINE").is_ok() {
            self.offline = true;
        }

        self
    }

    /// Returns the fixed calculation parameters carried by this config.
    pub fn calc_settings(&self) -> CalcSettings {
        CalcSettings {
            customs_rate: self.customs_rate,
            platform_rate: self.platform_rate,
            vat_rate: self.vat_rate,
            dutiable_base: self.dutiable_base,
        }
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Markdown,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use: table, json, markdown, csv", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}
