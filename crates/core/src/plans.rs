//! Subscription plans
//!
//! Retailers pay a monthly subscription on top of the flat order commission.
//! Annual billing takes 20% off the monthly price, rounded to whole units.

use std::{fmt, str::FromStr};

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{self, Currency},
};
use serde::Deserialize;
use thiserror::Error;

use crate::pricing::major_units;

/// Fraction of the monthly price kept when billed annually.
const ANNUAL_PRICE_FACTOR: Decimal = Decimal::from_parts(8, 0, 0, false, 1);

/// Fraction of the yearly price saved when billed annually.
const ANNUAL_SAVING_FACTOR: Decimal = Decimal::from_parts(2, 0, 0, false, 1);

/// Errors related to plan pricing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    /// The plan name is not recognised.
    #[error("unknown plan: {0}")]
    UnknownPlan(String),

    /// The plan currency is not offered.
    #[error("unsupported plan currency: {0}")]
    UnsupportedCurrency(String),

    /// A price could not be represented in minor units.
    #[error("price overflowed")]
    Overflow,
}

/// Subscription tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanTier {
    /// Small retailers getting started
    Basic,

    /// Growing businesses
    Growth,

    /// Large businesses on custom contracts
    Enterprise,
}

impl PlanTier {
    /// Every tier, cheapest first.
    pub const ALL: [PlanTier; 3] = [Self::Basic, Self::Growth, Self::Enterprise];

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Growth => "Growth",
            Self::Enterprise => "Enterprise",
        }
    }

    /// Maximum number of listed products, or `None` for unlimited.
    #[must_use]
    pub fn product_limit(self) -> Option<u32> {
        match self {
            Self::Basic => Some(50),
            Self::Growth | Self::Enterprise => None,
        }
    }

    /// Monthly list price in whole units, or `None` when sold through sales.
    #[must_use]
    pub fn list_price(self, currency: PlanCurrency) -> Option<Money<'static, Currency>> {
        let whole_units = match (self, currency) {
            (Self::Basic, PlanCurrency::Usd) => 29,
            (Self::Basic, PlanCurrency::Inr) => 2499,
            (Self::Growth, PlanCurrency::Usd) => 79,
            (Self::Growth, PlanCurrency::Inr) => 6499,
            (Self::Enterprise, _) => return None,
        };

        Some(Money::from_minor(whole_units * 100, currency.currency()))
    }

    /// Price for a billing cycle, or `None` when sold through sales.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::Overflow`] if the discounted price cannot be represented.
    pub fn price(
        self,
        currency: PlanCurrency,
        cycle: BillingCycle,
    ) -> Result<Option<PlanPrice>, PlanError> {
        let Some(list) = self.list_price(currency) else {
            return Ok(None);
        };

        let price = match cycle {
            BillingCycle::Monthly => PlanPrice {
                per_month: list,
                yearly_saving: None,
            },
            BillingCycle::Annual => {
                let monthly = major_units(&list);

                PlanPrice {
                    per_month: whole_units(monthly * ANNUAL_PRICE_FACTOR, list.currency())?,
                    yearly_saving: Some(whole_units(
                        monthly * Decimal::from(12) * ANNUAL_SAVING_FACTOR,
                        list.currency(),
                    )?),
                }
            }
        };

        Ok(Some(price))
    }
}

impl FromStr for PlanTier {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PlanError::UnknownPlan(s.to_string()))
    }
}

impl fmt::Display for PlanTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Currencies plans are listed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlanCurrency {
    /// US dollars
    #[default]
    Usd,

    /// Indian rupees
    Inr,
}

impl PlanCurrency {
    /// The ISO currency.
    #[must_use]
    pub fn currency(self) -> &'static Currency {
        match self {
            Self::Usd => iso::USD,
            Self::Inr => iso::INR,
        }
    }
}

impl FromStr for PlanCurrency {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "USD" => Ok(Self::Usd),
            "INR" => Ok(Self::Inr),
            _ => Err(PlanError::UnsupportedCurrency(s.to_string())),
        }
    }
}

/// Billing cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BillingCycle {
    /// Billed every month at list price
    #[default]
    Monthly,

    /// Billed yearly at a discount
    Annual,
}

/// Plan price for a billing cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanPrice {
    /// Effective monthly price
    pub per_month: Money<'static, Currency>,

    /// Saving per year compared with monthly billing, for annual billing
    pub yearly_saving: Option<Money<'static, Currency>>,
}

fn whole_units(
    amount: Decimal,
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, PlanError> {
    let whole = amount
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or(PlanError::Overflow)?;

    whole
        .checked_mul(10_i64.pow(currency.exponent))
        .map(|minor| Money::from_minor(minor, currency))
        .ok_or(PlanError::Overflow)
}
