//! Order Fixtures

use jiff::civil::Date;
use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, products::parse_money},
    orders::{Order, OrderStatus},
};

/// Wrapper for orders in YAML
#[derive(Debug, Deserialize)]
pub struct OrdersFixture {
    /// Orders, most recent first
    pub orders: Vec<OrderFixture>,
}

/// Order Fixture
#[derive(Debug, Deserialize)]
pub struct OrderFixture {
    /// Order identifier
    pub id: String,

    /// Customer name
    pub customer: String,

    /// Order total (e.g., "599.98 USD")
    pub total: String,

    /// Recorded commission
    pub commission: String,

    /// Recorded retailer amount
    pub retailer_amount: String,

    /// Fulfilment status
    pub status: OrderStatus,

    /// Date placed (e.g., "2026-02-14")
    pub date: Date,

    /// Number of items
    pub items: u32,
}

impl TryFrom<OrderFixture> for Order<'_> {
    type Error = FixtureError;

    fn try_from(fixture: OrderFixture) -> Result<Self, Self::Error> {
        Ok(Order {
            id: fixture.id,
            customer: fixture.customer,
            total: parse_money(&fixture.total)?,
            commission: parse_money(&fixture.commission)?,
            retailer_amount: parse_money(&fixture.retailer_amount)?,
            status: fixture.status,
            date: fixture.date,
            items: fixture.items,
        })
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use rusty_money::{Money, iso::USD};
    use testresult::TestResult;

    use super::*;

    #[test]
    fn order_fixture_parses_yaml() -> TestResult {
        let yaml = "orders:\n  - id: ORD-003\n    customer: Sofia Garcia\n    total: 279.98 USD\n    commission: 16.80 USD\n    retailer_amount: 263.18 USD\n    status: processing\n    date: \"2026-02-13\"\n    items: 3\n";

        let fixture: OrdersFixture = serde_norway::from_str(yaml)?;
        let order: Order<'_> = fixture
            .orders
            .into_iter()
            .next()
            .ok_or("no orders")?
            .try_into()?;

        assert_eq!(order.id, "ORD-003");
        assert_eq!(order.total, Money::from_minor(27998, USD));
        assert_eq!(order.status, OrderStatus::Processing);
        assert_eq!(order.date, date(2026, 2, 13));

        Ok(())
    }

    #[test]
    fn unknown_status_fails_to_parse() {
        let yaml = "orders:\n  - id: ORD-009\n    customer: Nobody\n    total: 1.00 USD\n    commission: 0.06 USD\n    retailer_amount: 0.94 USD\n    status: lost\n    date: \"2026-02-13\"\n    items: 1\n";

        assert!(serde_norway::from_str::<OrdersFixture>(yaml).is_err());
    }
}
