//! Cart Fixtures

use rustc_hash::FxHashMap;
use serde::Deserialize;

/// Wrapper for carts in YAML
#[derive(Debug, Deserialize)]
pub struct CartsFixture {
    /// Map of cart name -> cart fixture
    pub carts: FxHashMap<String, CartFixture>,
}

/// Cart Fixture
#[derive(Debug, Deserialize)]
pub struct CartFixture {
    /// Cart currency code (e.g., "USD")
    pub currency: String,

    /// Lines, in the order they were added
    #[serde(default)]
    pub lines: Vec<CartLineFixture>,
}

/// Cart Line Fixture
#[derive(Debug, Deserialize)]
pub struct CartLineFixture {
    /// Product identifier
    pub product: String,

    /// Quantity
    pub quantity: u32,
}
