//! Catalog sort orders

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::products::Product;

/// Returned when a sort order name is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort order: {0}")]
pub struct UnknownSortOrder(pub String);

/// Ordering applied to catalog search results.
///
/// All orders are stable: ties keep listing order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Listing order, unchanged.
    #[default]
    Listing,

    /// Most reviewed first.
    Popular,

    /// Cheapest first.
    PriceLowToHigh,

    /// Most expensive first.
    PriceHighToLow,

    /// Highest rated first.
    Rating,

    /// Most recently listed first.
    Newest,
}

impl SortOrder {
    /// Every sort order, in the order the storefront offers them.
    pub const ALL: [SortOrder; 6] = [
        Self::Listing,
        Self::Popular,
        Self::PriceLowToHigh,
        Self::PriceHighToLow,
        Self::Rating,
        Self::Newest,
    ];

    /// The storefront option value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Listing => "listing",
            Self::Popular => "popular",
            Self::PriceLowToHigh => "price-low",
            Self::PriceHighToLow => "price-high",
            Self::Rating => "rating",
            Self::Newest => "newest",
        }
    }

    /// Human readable label.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Listing => "Featured",
            Self::Popular => "Most Popular",
            Self::PriceLowToHigh => "Price: Low to High",
            Self::PriceHighToLow => "Price: High to Low",
            Self::Rating => "Highest Rated",
            Self::Newest => "Newest First",
        }
    }

    /// Reorder products in place. Input is assumed to be in listing order.
    pub fn apply(self, products: &mut [&Product<'_>]) {
        match self {
            Self::Listing => {}
            Self::Popular => products.sort_by(|a, b| b.reviews.cmp(&a.reviews)),
            Self::PriceLowToHigh => products.sort_by_key(|p| p.price.to_minor_units()),
            Self::PriceHighToLow => {
                products.sort_by(|a, b| b.price.to_minor_units().cmp(&a.price.to_minor_units()));
            }
            Self::Rating => products.sort_by(|a, b| b.rating.cmp(&a.rating)),
            Self::Newest => products.reverse(),
        }
    }
}

impl FromStr for SortOrder {
    type Err = UnknownSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|order| order.as_str() == s)
            .ok_or_else(|| UnknownSortOrder(s.to_string()))
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::test_support::product;

    use super::*;

    #[test]
    fn parses_storefront_values() -> TestResult {
        assert_eq!("price-low".parse::<SortOrder>()?, SortOrder::PriceLowToHigh);
        assert_eq!("popular".parse::<SortOrder>()?, SortOrder::Popular);
        assert_eq!(
            "cheapest".parse::<SortOrder>(),
            Err(UnknownSortOrder("cheapest".to_string()))
        );

        Ok(())
    }

    #[test]
    fn as_str_round_trips_through_from_str() -> TestResult {
        for order in SortOrder::ALL {
            assert_eq!(order.as_str().parse::<SortOrder>()?, order);
        }

        Ok(())
    }

    #[test]
    fn rating_ties_keep_listing_order() {
        let mut a = product("1", "A", 100, "Home", "S");
        let mut b = product("2", "B", 100, "Home", "S");
        let mut c = product("3", "C", 100, "Home", "S");
        a.rating = Decimal::new(45, 1);
        b.rating = Decimal::new(49, 1);
        c.rating = Decimal::new(45, 1);

        let mut products = vec![&a, &b, &c];
        SortOrder::Rating.apply(&mut products);

        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();

        assert_eq!(ids, vec!["2", "1", "3"]);
    }

    #[test]
    fn newest_reverses_listing() {
        let a = product("1", "A", 300, "Home", "S");
        let b = product("2", "B", 100, "Home", "S");

        let mut products = vec![&a, &b];
        SortOrder::Newest.apply(&mut products);

        assert_eq!(products.first().map(|p| p.id.as_str()), Some("2"));
    }

    #[test]
    fn price_high_to_low() {
        let a = product("1", "A", 100, "Home", "S");
        let b = product("2", "B", 300, "Home", "S");
        let c = product("3", "C", 200, "Home", "S");

        let mut products = vec![&a, &b, &c];
        SortOrder::PriceHighToLow.apply(&mut products);

        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();

        assert_eq!(ids, vec!["2", "3", "1"]);
    }
}
