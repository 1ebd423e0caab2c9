//! Marketplace Config

use std::path::PathBuf;

use clap::Args;
use globalretailx::{
    commission::{CommissionError, CommissionRate},
    fixtures::{
        BUNDLED_FIXTURES, Fixture, FixtureError,
        products::{parse_money, parse_percentage},
    },
    pricing::{CheckoutPolicy, PricingError},
};

/// Fixture data and pricing rules.
#[derive(Debug, Args)]
pub struct MarketplaceConfig {
    /// Directory holding the fixture sets
    #[arg(long, env = "GRX_FIXTURES", default_value = BUNDLED_FIXTURES, global = true)]
    pub fixtures: PathBuf,

    /// Fixture set to load
    #[arg(long, env = "GRX_FIXTURE_SET", default_value = "marketplace", global = true)]
    pub fixture_set: String,

    /// Platform commission rate ("6%" or "0.06")
    #[arg(long, env = "GRX_COMMISSION_RATE", default_value = "6%", global = true)]
    pub commission_rate: String,

    /// Tax rate applied to the cart subtotal ("8%" or "0.08")
    #[arg(long, env = "GRX_TAX_RATE", default_value = "8%", global = true)]
    pub tax_rate: String,

    /// Subtotal above which shipping is free
    #[arg(long, env = "GRX_FREE_SHIPPING_OVER", default_value = "50.00 USD", global = true)]
    pub free_shipping_over: String,

    /// Shipping fee charged otherwise
    #[arg(long, env = "GRX_FLAT_SHIPPING", default_value = "9.99 USD", global = true)]
    pub flat_shipping: String,
}

/// Errors turning settings into pricing rules.
#[derive(Debug, thiserror::Error)]
pub enum MarketplaceConfigError {
    /// A rate or price could not be parsed.
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    /// The commission rate is out of range.
    #[error(transparent)]
    Commission(#[from] CommissionError),

    /// The tax rate or a shipping amount is out of range.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

impl MarketplaceConfig {
    /// Load the configured fixture set.
    ///
    /// # Errors
    ///
    /// Returns an error if any fixture file cannot be loaded.
    pub fn load_fixture(&self) -> Result<Fixture<'static>, FixtureError> {
        let mut fixture = Fixture::with_base_path(&self.fixtures);

        fixture.load_set(&self.fixture_set)?;

        Ok(fixture)
    }

    /// The configured commission rate.
    ///
    /// # Errors
    ///
    /// Returns an error if the rate cannot be parsed or lies outside 0% to 100%.
    pub fn commission_rate(&self) -> Result<CommissionRate, MarketplaceConfigError> {
        Ok(CommissionRate::new(parse_percentage(&self.commission_rate)?)?)
    }

    /// The configured checkout policy.
    ///
    /// # Errors
    ///
    /// Returns an error if a rate or price cannot be parsed, the tax rate lies outside
    /// 0% to 100%, or a shipping amount is negative.
    pub fn checkout_policy(&self) -> Result<CheckoutPolicy<'static>, MarketplaceConfigError> {
        Ok(CheckoutPolicy::new(
            parse_money(&self.free_shipping_over)?,
            parse_money(&self.flat_shipping)?,
            parse_percentage(&self.tax_rate)?,
        )?)
    }
}
