//! Pricing
//!
//! Cart totals: subtotal, shipping, tax and grand total. Amounts are kept as exact
//! major-unit decimals; nothing is rounded until it is turned back into [`Money`].

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::cart::Cart;

/// Decimal places kept when reading a [`Percentage`]; drops float noise from `f64` inputs.
const RATE_SCALE: u32 = 10;

/// Errors that can occur while pricing a cart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// A policy amount is in a different currency from the cart (policy currency, cart currency).
    #[error("policy is priced in {0}, but cart has currency {1}")]
    CurrencyMismatch(&'static str, &'static str),

    /// Decimal arithmetic overflowed.
    #[error("amount overflowed")]
    Overflow,

    /// An amount could not be represented in minor units.
    #[error("amount {0} cannot be represented in minor units")]
    MinorUnits(Decimal),

    /// Tax rates must lie between 0% and 100% inclusive.
    #[error("tax rate {0} is outside 0% to 100%")]
    RateOutOfRange(Decimal),

    /// Shipping amounts cannot be negative.
    #[error("shipping amount {0} is negative")]
    NegativeAmount(Decimal),
}

/// Convert money to an exact major-unit amount (e.g. 29999 cents -> 299.99).
pub fn major_units(money: &Money<'_, Currency>) -> Decimal {
    Decimal::new(money.to_minor_units(), money.currency().exponent)
}

/// Round a major-unit amount to the currency's minor units, midpoint away from zero.
///
/// # Errors
///
/// Returns [`PricingError::MinorUnits`] if the rounded amount does not fit in an `i64`.
pub fn to_money(amount: Decimal, currency: &Currency) -> Result<Money<'_, Currency>, PricingError> {
    let minor = amount
        .round_dp_with_strategy(currency.exponent, RoundingStrategy::MidpointAwayFromZero)
        .checked_mul(minor_units_per_major(currency))
        .and_then(|value| value.to_i64())
        .ok_or(PricingError::MinorUnits(amount))?;

    Ok(Money::from_minor(minor, currency))
}

/// A percentage as a plain decimal fraction (15% -> 0.15).
pub fn percent_decimal(percent: &Percentage) -> Decimal {
    // decimal_percentage doesn't expose the underlying Decimal
    ((*percent) * Decimal::ONE).round_dp(RATE_SCALE).normalize()
}

fn minor_units_per_major(currency: &Currency) -> Decimal {
    Decimal::from(10_i64.pow(currency.exponent))
}

/// Shipping and tax rules applied at checkout.
#[derive(Debug, Clone, Copy)]
pub struct CheckoutPolicy<'a> {
    /// Shipping is free when the subtotal is strictly greater than this amount.
    pub free_shipping_over: Money<'a, Currency>,

    /// Flat shipping fee charged otherwise, including on an empty cart.
    pub flat_shipping: Money<'a, Currency>,

    /// Flat tax rate applied to the subtotal.
    pub tax_rate: Percentage,
}

impl CheckoutPolicy<'static> {
    /// Free shipping over 50.00, otherwise 9.99; 8% tax.
    #[must_use]
    pub fn standard(currency: &'static Currency) -> Self {
        Self {
            free_shipping_over: Money::from_minor(5000, currency),
            flat_shipping: Money::from_minor(999, currency),
            tax_rate: Percentage::from(0.08),
        }
    }
}

impl<'a> CheckoutPolicy<'a> {
    /// Create a policy, checking the tax rate and shipping amounts.
    ///
    /// # Errors
    ///
    /// - [`PricingError::RateOutOfRange`]: the tax rate is outside 0% to 100%.
    /// - [`PricingError::NegativeAmount`]: a shipping amount is below zero.
    pub fn new(
        free_shipping_over: Money<'a, Currency>,
        flat_shipping: Money<'a, Currency>,
        tax_rate: Percentage,
    ) -> Result<Self, PricingError> {
        let policy = Self {
            free_shipping_over,
            flat_shipping,
            tax_rate,
        };

        policy.validate()?;

        Ok(policy)
    }

    fn validate(&self) -> Result<(), PricingError> {
        let tax = percent_decimal(&self.tax_rate);

        if tax < Decimal::ZERO || tax > Decimal::ONE {
            return Err(PricingError::RateOutOfRange(tax));
        }

        [self.free_shipping_over, self.flat_shipping]
            .iter()
            .map(major_units)
            .find(|amount| *amount < Decimal::ZERO)
            .map_or(Ok(()), |amount| Err(PricingError::NegativeAmount(amount)))
    }

    fn check_currency(&self, currency: &'static Currency) -> Result<(), PricingError> {
        [self.free_shipping_over, self.flat_shipping]
            .iter()
            .map(|money| money.currency())
            .find(|policy_currency| *policy_currency != currency)
            .map_or(Ok(()), |policy_currency| {
                Err(PricingError::CurrencyMismatch(
                    policy_currency.iso_alpha_code,
                    currency.iso_alpha_code,
                ))
            })
    }
}

/// Derived cart amounts, in exact major units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartTotals {
    /// Sum of unit price times quantity
    pub subtotal: Decimal,

    /// Shipping fee
    pub shipping: Decimal,

    /// Tax on the subtotal
    pub tax: Decimal,

    /// Subtotal plus shipping plus tax
    pub total: Decimal,

    /// Currency of every amount
    pub currency: &'static Currency,
}

impl CartTotals {
    /// Whether shipping is free.
    #[must_use]
    pub fn free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }

    /// Round an amount from these totals to money for display.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::MinorUnits`] if the amount does not fit in minor units.
    pub fn money(&self, amount: Decimal) -> Result<Money<'static, Currency>, PricingError> {
        to_money(amount, self.currency)
    }
}

/// Sum of every line's unit price times quantity.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the sum overflows.
pub fn subtotal(cart: &Cart<'_>) -> Result<Decimal, PricingError> {
    cart.iter().try_fold(Decimal::ZERO, |acc, line| {
        acc.checked_add(line.line_total())
            .ok_or(PricingError::Overflow)
    })
}

/// Price a cart under a checkout policy.
///
/// # Errors
///
/// - [`PricingError::RateOutOfRange`] or [`PricingError::NegativeAmount`]: the policy is invalid.
/// - [`PricingError::CurrencyMismatch`]: the policy amounts are not in the cart currency.
/// - [`PricingError::Overflow`]: decimal arithmetic overflowed.
pub fn price_cart(cart: &Cart<'_>, policy: &CheckoutPolicy<'_>) -> Result<CartTotals, PricingError> {
    let currency = cart.currency();

    policy.validate()?;
    policy.check_currency(currency)?;

    let subtotal = subtotal(cart)?;

    let shipping = if subtotal > major_units(&policy.free_shipping_over) {
        Decimal::ZERO
    } else {
        major_units(&policy.flat_shipping)
    };

    let tax = subtotal
        .checked_mul(percent_decimal(&policy.tax_rate))
        .ok_or(PricingError::Overflow)?;

    let total = subtotal
        .checked_add(shipping)
        .and_then(|value| value.checked_add(tax))
        .ok_or(PricingError::Overflow)?;

    Ok(CartTotals {
        subtotal,
        shipping,
        tax,
        total,
        currency,
    })
}
