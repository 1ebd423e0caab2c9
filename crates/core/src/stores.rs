//! Stores

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

use crate::plans::PlanTier;

/// Onboarding status of a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreStatus {
    /// Trading
    Active,

    /// Awaiting approval
    Pending,

    /// Suspended by the platform
    Suspended,
}

/// A retailer's store on the marketplace.
#[derive(Debug, Clone, PartialEq)]
pub struct Store<'a> {
    /// Store identifier
    pub id: String,

    /// Display name, as shown on product listings
    pub name: String,

    /// Country of registration
    pub country: String,

    /// Owner name
    pub owner: String,

    /// Subscription tier
    pub plan: PlanTier,

    /// Number of listed products
    pub total_products: u32,

    /// Lifetime revenue
    pub revenue: Money<'a, Currency>,

    /// Average rating, between 0.0 and 5.0
    pub rating: Decimal,

    /// Onboarding status
    pub status: StoreStatus,
}

impl Store<'_> {
    /// Whether the store is trading.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == StoreStatus::Active
    }

    /// Whether the store lists more products than its plan allows.
    #[must_use]
    pub fn over_product_limit(&self) -> bool {
        self.plan
            .product_limit()
            .is_some_and(|limit| self.total_products > limit)
    }
}
