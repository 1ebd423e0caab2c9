//! Orders
//!
//! Sample orders shown on the dashboards. They are read-only: there are no
//! status transitions, only aggregation and a check that the stored split
//! agrees with the commission rate.

use std::fmt;

use jiff::civil::Date;
use rustc_hash::FxHashMap;
use rusty_money::{Money, MoneyError, iso::Currency};
use serde::Deserialize;
use tracing::warn;

use crate::commission::{CommissionError, CommissionRate, CommissionSplit};

/// Fulfilment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Awaiting processing
    Pending,

    /// Being picked and packed
    Processing,

    /// Handed to the carrier
    Shipped,

    /// Received by the customer
    Delivered,
}

impl OrderStatus {
    /// Every status, in fulfilment order.
    pub const ALL: [OrderStatus; 4] = [
        Self::Pending,
        Self::Processing,
        Self::Shipped,
        Self::Delivered,
    ];

    /// Lowercase status label.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A placed order.
#[derive(Debug, Clone, PartialEq)]
pub struct Order<'a> {
    /// Order identifier (e.g. `ORD-001`)
    pub id: String,

    /// Customer name
    pub customer: String,

    /// Order total
    pub total: Money<'a, Currency>,

    /// Platform commission as recorded
    pub commission: Money<'a, Currency>,

    /// Retailer amount as recorded
    pub retailer_amount: Money<'a, Currency>,

    /// Fulfilment status
    pub status: OrderStatus,

    /// Date placed
    pub date: Date,

    /// Number of items
    pub items: u32,
}

impl<'a> Order<'a> {
    /// The split the commission rate gives for this order's total.
    ///
    /// # Errors
    ///
    /// Returns an error if the split cannot be computed.
    pub fn expected_split(&self, rate: &CommissionRate) -> Result<CommissionSplit<'a>, CommissionError> {
        rate.split(self.total)
    }

    /// Whether the recorded commission and retailer amount match the rate.
    ///
    /// # Errors
    ///
    /// Returns an error if the split cannot be computed.
    pub fn reconciles(&self, rate: &CommissionRate) -> Result<bool, CommissionError> {
        let expected = self.expected_split(rate)?;

        let matches = expected.commission == self.commission
            && expected.retailer_amount == self.retailer_amount;

        if !matches {
            warn!(
                order = %self.id,
                recorded_commission = self.commission.to_minor_units(),
                expected_commission = expected.commission.to_minor_units(),
                recorded_retailer = self.retailer_amount.to_minor_units(),
                expected_retailer = expected.retailer_amount.to_minor_units(),
                "order split does not match commission rate"
            );
        }

        Ok(matches)
    }
}

/// Totals across a set of orders.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLedger<'a> {
    /// Sum of order totals
    pub gross: Money<'a, Currency>,

    /// Sum of recorded commission
    pub commission: Money<'a, Currency>,

    /// Sum of recorded retailer amounts
    pub retailer_net: Money<'a, Currency>,

    /// Sum of item counts
    pub items: u64,

    status_counts: FxHashMap<OrderStatus, usize>,
}

impl<'a> OrderLedger<'a> {
    /// Aggregate orders priced in `currency`.
    ///
    /// # Errors
    ///
    /// Returns [`MoneyError::CurrencyMismatch`] if an order is in another currency.
    pub fn from_orders<'o>(
        orders: impl IntoIterator<Item = &'o Order<'a>>,
        currency: &'a Currency,
    ) -> Result<Self, MoneyError>
    where
        'a: 'o,
    {
        let zero = Money::from_minor(0, currency);

        orders.into_iter().try_fold(
            Self {
                gross: zero,
                commission: zero,
                retailer_net: zero,
                items: 0,
                status_counts: FxHashMap::default(),
            },
            |mut ledger, order| {
                ledger.gross = ledger.gross.add(order.total)?;
                ledger.commission = ledger.commission.add(order.commission)?;
                ledger.retailer_net = ledger.retailer_net.add(order.retailer_amount)?;
                ledger.items += u64::from(order.items);

                *ledger.status_counts.entry(order.status).or_default() += 1;

                Ok(ledger)
            },
        )
    }

    /// Number of orders with a status.
    #[must_use]
    pub fn count(&self, status: OrderStatus) -> usize {
        self.status_counts.get(&status).copied().unwrap_or_default()
    }

    /// Number of orders aggregated.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.status_counts.values().sum()
    }
}
