//! CLI configuration module

use clap::Parser;

use crate::{
    commands::Command,
    config::{logging::LoggingConfig, marketplace::MarketplaceConfig},
};

pub(crate) mod logging;
pub(crate) mod marketplace;

pub(crate) use logging::LogFormat;

/// GlobalRetailX marketplace tools
#[derive(Debug, Parser)]
#[command(name = "globalretailx", about = "GlobalRetailX marketplace tools", long_about = None)]
pub struct CliConfig {
    /// Fixture data and pricing rules.
    #[command(flatten)]
    pub marketplace: MarketplaceConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
