//! Store Fixtures

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, products::parse_money},
    plans::PlanTier,
    stores::{Store, StoreStatus},
};

/// Wrapper for stores in YAML
#[derive(Debug, Deserialize)]
pub struct StoresFixture {
    /// Stores
    pub stores: Vec<StoreFixture>,
}

/// Store Fixture
#[derive(Debug, Deserialize)]
pub struct StoreFixture {
    /// Store identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Country of registration
    pub country: String,

    /// Owner name
    pub owner: String,

    /// Subscription tier
    pub plan: PlanTier,

    /// Number of listed products
    pub total_products: u32,

    /// Lifetime revenue (e.g., "156780.00 USD")
    pub revenue: String,

    /// Average rating
    pub rating: Decimal,

    /// Onboarding status
    pub status: StoreStatus,
}

impl TryFrom<StoreFixture> for Store<'_> {
    type Error = FixtureError;

    fn try_from(fixture: StoreFixture) -> Result<Self, Self::Error> {
        if fixture.rating < Decimal::ZERO || fixture.rating > Decimal::from(5) {
            return Err(FixtureError::InvalidRating(fixture.rating));
        }

        Ok(Store {
            id: fixture.id,
            name: fixture.name,
            country: fixture.country,
            owner: fixture.owner,
            plan: fixture.plan,
            total_products: fixture.total_products,
            revenue: parse_money(&fixture.revenue)?,
            rating: fixture.rating,
            status: fixture.status,
        })
    }
}
