//! Commission
//!
//! The platform keeps a flat share of every order total; the retailer receives
//! the rest. Commission is rounded to minor units and the retailer amount is
//! derived by subtraction, so the two always sum back to the total.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::pricing::{PricingError, major_units, percent_decimal, to_money};

/// Errors specific to commission calculations.
#[derive(Debug, Error)]
pub enum CommissionError {
    /// Rates must lie between 0% and 100% inclusive.
    #[error("commission rate {0} is outside 0% to 100%")]
    RateOutOfRange(Decimal),

    /// The commission could not be represented in minor units.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Platform commission rate, applied uniformly to every order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommissionRate(Percentage);

impl CommissionRate {
    /// Create a rate.
    ///
    /// # Errors
    ///
    /// Returns [`CommissionError::RateOutOfRange`] unless the rate is within 0% to 100%.
    pub fn new(rate: Percentage) -> Result<Self, CommissionError> {
        let fraction = percent_decimal(&rate);

        if fraction < Decimal::ZERO || fraction > Decimal::ONE {
            return Err(CommissionError::RateOutOfRange(fraction));
        }

        Ok(Self(rate))
    }

    /// The marketplace's standard 6%.
    #[must_use]
    pub fn standard() -> Self {
        Self(Percentage::from(0.06))
    }

    /// The rate as a decimal fraction (6% -> 0.06).
    #[must_use]
    pub fn fraction(&self) -> Decimal {
        percent_decimal(&self.0)
    }

    /// The rate in percent points (0.06 -> 6).
    #[must_use]
    pub fn percent_points(&self) -> Decimal {
        (self.fraction() * Decimal::ONE_HUNDRED).normalize()
    }

    /// Split an order total into commission and retailer amount.
    ///
    /// # Errors
    ///
    /// Returns an error if the commission cannot be represented in minor units,
    /// or if money arithmetic fails.
    pub fn split<'a>(
        &self,
        total: Money<'a, Currency>,
    ) -> Result<CommissionSplit<'a>, CommissionError> {
        let exact = major_units(&total)
            .checked_mul(self.fraction())
            .ok_or(PricingError::Overflow)?;

        let commission = to_money(exact, total.currency())?;
        let retailer_amount = total.sub(commission)?;

        Ok(CommissionSplit {
            total,
            commission,
            retailer_amount,
        })
    }
}

impl Default for CommissionRate {
    fn default() -> Self {
        Self::standard()
    }
}

/// An order total split between the platform and the retailer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommissionSplit<'a> {
    /// Order total
    pub total: Money<'a, Currency>,

    /// Platform commission
    pub commission: Money<'a, Currency>,

    /// Amount attributed to the retailer
    pub retailer_amount: Money<'a, Currency>,
}

impl CommissionSplit<'_> {
    /// Retailer share of the total as a fraction, or zero for a zero total.
    #[must_use]
    pub fn retailer_share(&self) -> Decimal {
        let total = major_units(&self.total);

        if total.is_zero() {
            return Decimal::ZERO;
        }

        major_units(&self.retailer_amount) / total
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{INR, USD};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn standard_rate_is_six_percent() {
        let rate = CommissionRate::default();

        assert_eq!(rate.fraction(), Decimal::new(6, 2));
        assert_eq!(rate.percent_points(), Decimal::from(6));
    }

    #[test]
    fn splits_one_hundred() -> TestResult {
        let split = CommissionRate::standard().split(Money::from_minor(10000, USD))?;

        assert_eq!(split.commission, Money::from_minor(600, USD));
        assert_eq!(split.retailer_amount, Money::from_minor(9400, USD));
        assert_eq!(split.commission.add(split.retailer_amount)?, split.total);
        assert_eq!(split.retailer_share(), Decimal::new(94, 2));

        Ok(())
    }

    #[test]
    fn rounds_commission_to_minor_units() -> TestResult {
        // 279.98 * 6% = 16.7988
        let split = CommissionRate::standard().split(Money::from_minor(27998, USD))?;

        assert_eq!(split.commission, Money::from_minor(1680, USD));
        assert_eq!(split.retailer_amount, Money::from_minor(26318, USD));

        Ok(())
    }

    #[test]
    fn split_preserves_currency() -> TestResult {
        let split = CommissionRate::standard().split(Money::from_minor(249_900, INR))?;

        assert_eq!(split.commission, Money::from_minor(14994, INR));
        assert_eq!(split.retailer_amount.currency(), INR);

        Ok(())
    }

    #[test]
    fn zero_total_splits_to_zero() -> TestResult {
        let split = CommissionRate::standard().split(Money::from_minor(0, USD))?;

        assert_eq!(split.commission, Money::from_minor(0, USD));
        assert_eq!(split.retailer_share(), Decimal::ZERO);

        Ok(())
    }

    #[test]
    fn rejects_out_of_range_rates() {
        assert!(matches!(
            CommissionRate::new(Percentage::from(1.5)),
            Err(CommissionError::RateOutOfRange(_))
        ));
        assert!(matches!(
            CommissionRate::new(Percentage::from(-0.01)),
            Err(CommissionError::RateOutOfRange(_))
        ));
        assert!(CommissionRate::new(Percentage::from(1.0)).is_ok());
    }
}
