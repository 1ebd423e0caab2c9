//! GlobalRetailX marketplace command line
//!
//! Searches the catalog, prices saved carts, reconciles sample orders and
//! lists subscription plans, using the fixture data shipped with the core crate.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::CliConfig;

mod commands;
mod config;
mod logging;
#[cfg(test)]
mod test_helpers;

/// GlobalRetailX CLI entry point
fn main() -> Result<()> {
    // Load configuration from .env, environment and CLI arguments
    let config = CliConfig::load().unwrap_or_else(|err| err.exit());

    logging::init_subscriber(&config).context("failed to initialise logging")?;

    debug!(
        fixtures = %config.marketplace.fixtures.display(),
        set = %config.marketplace.fixture_set,
        "loaded configuration"
    );

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    config.command.run(&config.marketplace, &mut handle)?;

    handle.flush()?;

    Ok(())
}
