//! Subcommands

use std::io::Write;

use clap::Subcommand;

use crate::config::marketplace::MarketplaceConfig;

pub(crate) mod cart;
pub(crate) mod catalog;
pub(crate) mod orders;
pub(crate) mod plans;
pub(crate) mod split;
mod table;

/// Marketplace commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List products matching a search
    Catalog(catalog::CatalogArgs),

    /// Price a saved cart, optionally after changing it
    Cart(cart::CartArgs),

    /// Show sample orders, their commission split and the totals
    Orders,

    /// Show subscription plan prices
    Plans(plans::PlansArgs),

    /// Split an order total into platform commission and retailer amount
    Split(split::SplitArgs),
}

impl Command {
    /// Run the command, writing its output to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration is invalid, fixtures cannot be loaded, or the
    /// command itself fails.
    pub fn run(&self, config: &MarketplaceConfig, out: &mut impl Write) -> anyhow::Result<()> {
        match self {
            Self::Catalog(args) => catalog::run(args, &config.load_fixture()?, out),
            Self::Cart(args) => cart::run(
                args,
                &config.load_fixture()?,
                config.checkout_policy()?,
                out,
            ),
            Self::Orders => orders::run(&config.load_fixture()?, &config.commission_rate()?, out),
            Self::Plans(args) => plans::run(args, &config.commission_rate()?, out),
            Self::Split(args) => split::run(args, &config.commission_rate()?, out),
        }
    }
}
