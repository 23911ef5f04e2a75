//! margin-calc - Profit-margin calculator CLI for Japan-to-UK resellers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use margin_calc::calc::detail::DutiableBase;
use margin_calc::commands::{self, CalcCommand, CalcInputs};
use margin_calc::config::{Config, OutputFormat};
use margin_calc::shipping::Dimensions;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "margin-calc",
    version,
    about = "Profit-margin calculator for Japan-to-UK e-commerce resellers",
    long_about = "Computes the cheapest applicable shipping method, UK VAT liability \
                  (135 GBP threshold), and a full profit breakdown from cost price, \
                  selling price, package size, and a live GBP/JPY exchange rate."
)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "table", global = true)]
    format: OutputFormat,

    /// Skip the live exchange-rate fetch
    #[arg(long, global = true, env = "MARGIN_OFFLINE")]
    offline: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the full profit breakdown
    #[command(alias = "c")]
    Calc {
        /// Purchase cost in JPY
        #[arg(long)]
        cost: Option<f64>,

        /// Selling price in JPY
        #[arg(long)]
        price: Option<f64>,

        /// Package weight in grams
        #[arg(short, long)]
        weight: Option<f64>,

        /// Package length in cm
        #[arg(long, default_value = "0")]
        length: f64,

        /// Package width in cm
        #[arg(long, default_value = "0")]
        width: f64,

        /// Package height in cm
        #[arg(long, default_value = "0")]
        height: f64,

        /// Marketplace category label (see `categories`)
        #[arg(long)]
        category: Option<String>,

        /// Category fee percentage, overriding the category lookup
        #[arg(long)]
        fee_percent: Option<f64>,

        /// Fixed GBP/JPY rate instead of the live fetch
        #[arg(long, env = "MARGIN_RATE")]
        rate: Option<f64>,

        /// Customs duty rate in percent
        #[arg(long)]
        customs_rate: Option<f64>,

        /// Additional platform fee rate in percent
        #[arg(long)]
        platform_rate: Option<f64>,

        /// Customs dutiable base (cost_plus_shipping or cost_shipping_fees)
        #[arg(long)]
        dutiable_base: Option<DutiableBase>,
    },

    /// Quote the cheapest eligible shipping method
    #[command(alias = "s")]
    Shipping {
        /// Package weight in grams
        #[arg(short, long)]
        weight: f64,

        /// Package length in cm
        #[arg(long, default_value = "0")]
        length: f64,

        /// Package width in cm
        #[arg(long, default_value = "0")]
        width: f64,

        /// Package height in cm
        #[arg(long, default_value = "0")]
        height: f64,
    },

    /// List configured shipping methods
    Methods,

    /// List marketplace category fees
    Categories,

    /// Fetch the current GBP/JPY exchange rate
    Rate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    config.format = cli.format;
    if cli.offline {
        config.offline = true;
    }

    match cli.command {
        Commands::Calc {
            cost,
            price,
            weight,
            length,
            width,
            height,
            category,
            fee_percent,
            rate,
            customs_rate,
            platform_rate,
            dutiable_base,
        } => {
            if let Some(r) = customs_rate {
                config.customs_rate = r;
            }
            if let Some(r) = platform_rate {
                config.platform_rate = r;
            }
            if let Some(base) = dutiable_base {
                config.dutiable_base = base;
            }

            let inputs = CalcInputs {
                cost_price: cost,
                selling_price: price,
                weight_grams: weight,
                dimensions: Dimensions::new(length, width, height),
                category,
                fee_percent,
                rate,
            };

            let cmd = CalcCommand::new(config);
            let output = cmd.execute(inputs).await?;
            println!("{}", output);
        }

        Commands::Shipping { weight, length, width, height } => {
            let output =
                commands::shipping::quote(&config, weight, Dimensions::new(length, width, height))?;
            println!("{}", output);
        }

        Commands::Methods => {
            println!("{}", commands::shipping::list_methods(&config)?);
        }

        Commands::Categories => {
            println!("{}", commands::shipping::list_categories(&config)?);
        }

        Commands::Rate => {
            let output = commands::rate::current_rate(&config).await?;
            println!("{}", output);
        }
    }

    Ok(())
}
