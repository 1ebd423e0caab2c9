//! Product Fixtures

use std::str::FromStr;

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{Findable, Money, iso::Currency};
use serde::Deserialize;
use smallvec::SmallVec;

use crate::{
    fixtures::FixtureError,
    products::{Product, Seller, Swatch},
};

/// Wrapper for products in YAML, in listing order
#[derive(Debug, Deserialize)]
pub struct ProductsFixture {
    /// Products, in listing order
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product identifier
    pub id: String,

    /// Product name
    pub name: String,

    /// Product price (e.g., "299.99 USD")
    pub price: String,

    /// Category label
    pub category: String,

    /// Store name
    pub store: String,

    /// Store country
    pub store_country: String,

    /// Average rating
    pub rating: Decimal,

    /// Number of reviews
    pub reviews: u32,

    /// Whether an interactive 3D preview exists
    #[serde(default)]
    pub has_3d_model: bool,

    /// Available stock
    pub stock: u32,

    /// Colour swatches as hex strings
    #[serde(default)]
    pub colors: Vec<String>,
}

impl TryFrom<ProductFixture> for Product<'_> {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let price = parse_money(&fixture.price)?;

        if fixture.rating < Decimal::ZERO || fixture.rating > Decimal::from(5) {
            return Err(FixtureError::InvalidRating(fixture.rating));
        }

        let swatches = fixture
            .colors
            .iter()
            .map(|hex| Swatch::new(hex).ok_or_else(|| FixtureError::InvalidSwatch(hex.clone())))
            .collect::<Result<SmallVec<[Swatch; 3]>, _>>()?;

        Ok(Product {
            id: fixture.id,
            name: fixture.name,
            price,
            category: fixture.category,
            seller: Seller {
                name: fixture.store,
                country: fixture.store_country,
            },
            rating: fixture.rating,
            reviews: fixture.reviews,
            has_3d_model: fixture.has_3d_model,
            stock: fixture.stock,
            swatches,
        })
    }
}

/// Parse price string (e.g., "2.99 USD") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, has more decimal places than
/// the currency allows, or if the currency code is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    if parts.len() != 2 {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    }

    let amount = parts
        .first()
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let currency_code = parts
        .get(1)
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = Currency::find(currency_code)
        .ok_or_else(|| FixtureError::UnknownCurrency((*currency_code).to_string()))?;

    if amount.scale() > currency.exponent {
        return Err(FixtureError::InvalidPrice(s.to_string()));
    }

    let minor_units = amount
        .checked_mul(Decimal::from(10_i64.pow(currency.exponent)))
        .and_then(|value| value.to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    Ok((minor_units, currency))
}

/// Parse price string (e.g., "9.99 USD") into [`Money`]
///
/// # Errors
///
/// See [`parse_price`].
pub fn parse_money(s: &str) -> Result<Money<'static, Currency>, FixtureError> {
    let (minor_units, currency) = parse_price(s)?;

    Ok(Money::from_minor(minor_units, currency))
}

/// Parse percentage string (e.g., "6%" or "0.06") into a `Percentage`
///
/// Accepts two formats:
/// - Percentage format: "6%" for 6%
/// - Decimal format: "0.06" for 6%
///
/// # Errors
///
/// Returns an error unless the value is a plain decimal number; `NaN`, infinities
/// and exponent notation are rejected.
pub fn parse_percentage(s: &str) -> Result<Percentage, FixtureError> {
    let trimmed = s.trim();
    let invalid = || FixtureError::InvalidPercentage(s.to_string());

    let fraction = if let Some(percent_str) = trimmed.strip_suffix('%') {
        Decimal::from_str(percent_str.trim())
            .map_err(|_err| invalid())?
            .checked_div(Decimal::ONE_HUNDRED)
            .ok_or_else(invalid)?
    } else {
        Decimal::from_str(trimmed).map_err(|_err| invalid())?
    };

    Ok(Percentage::from(fraction))
}
