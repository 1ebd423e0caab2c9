//! Cart
//!
//! A session cart. Updates consume the cart and hand back the new state, so the
//! owner is always the single writer.

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::debug;

use crate::{
    pricing::major_units,
    products::{Product, ProductKey},
};

/// Errors related to cart construction or updates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// A line's currency differs from the cart currency (index, line currency, cart currency).
    #[error("Line {0} has currency {1}, but cart has currency {2}")]
    CurrencyMismatch(usize, &'static str, &'static str),

    /// A line index was not found in the cart.
    #[error("Line {0} not found")]
    LineNotFound(usize),

    /// Products cannot be added with a quantity of zero.
    #[error("Quantity must be at least 1")]
    ZeroQuantity,
}

/// One product and its quantity in a cart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartLine<'a> {
    product: ProductKey,
    unit_price: Money<'a, Currency>,
    quantity: NonZeroU32,
}

impl<'a> CartLine<'a> {
    /// Create a new cart line.
    #[must_use]
    pub fn new(product: ProductKey, unit_price: Money<'a, Currency>, quantity: NonZeroU32) -> Self {
        Self {
            product,
            unit_price,
            quantity,
        }
    }

    /// The product this line refers to.
    #[must_use]
    pub fn product(&self) -> ProductKey {
        self.product
    }

    /// Unit price of the product.
    #[must_use]
    pub fn unit_price(&self) -> &Money<'a, Currency> {
        &self.unit_price
    }

    /// Quantity, always at least 1.
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.quantity.get()
    }

    /// Unit price times quantity, in major units.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        major_units(&self.unit_price) * Decimal::from(self.quantity.get())
    }

    fn with_delta(self, delta: i64) -> Self {
        let requested = i64::from(self.quantity.get()).saturating_add(delta).max(1);
        let clamped = u32::try_from(requested).unwrap_or(u32::MAX);

        Self {
            quantity: NonZeroU32::new(clamped).unwrap_or(NonZeroU32::MIN),
            ..self
        }
    }
}

/// Cart
#[derive(Debug, Clone, PartialEq)]
pub struct Cart<'a> {
    lines: Vec<CartLine<'a>>,
    currency: &'static Currency,
}

impl<'a> Cart<'a> {
    /// Create an empty cart.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            lines: Vec::new(),
            currency,
        }
    }

    /// Create a cart with the given lines.
    ///
    /// # Errors
    ///
    /// Returns a `CartError` if there was a currency mismatch error.
    pub fn with_lines(
        lines: impl Into<Vec<CartLine<'a>>>,
        currency: &'static Currency,
    ) -> Result<Self, CartError> {
        let lines = lines.into();

        lines.iter().enumerate().try_for_each(|(i, line)| {
            let line_currency = line.unit_price().currency();

            if line_currency == currency {
                Ok(())
            } else {
                Err(CartError::CurrencyMismatch(
                    i,
                    line_currency.iso_alpha_code,
                    currency.iso_alpha_code,
                ))
            }
        })?;

        Ok(Cart { lines, currency })
    }

    /// Add a product. Adding a product already in the cart increases that line's quantity.
    ///
    /// # Errors
    ///
    /// - [`CartError::ZeroQuantity`]: `quantity` was zero.
    /// - [`CartError::CurrencyMismatch`]: the product is priced in another currency.
    pub fn add(
        mut self,
        key: ProductKey,
        product: &Product<'a>,
        quantity: u32,
    ) -> Result<Self, CartError> {
        let quantity = NonZeroU32::new(quantity).ok_or(CartError::ZeroQuantity)?;
        let product_currency = product.price.currency();

        if product_currency != self.currency {
            return Err(CartError::CurrencyMismatch(
                self.lines.len(),
                product_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        if let Some(index) = self.lines.iter().position(|line| line.product == key) {
            debug!(line = index, added = quantity.get(), "merging product into cart line");

            return self.update_quantity(index, i64::from(quantity.get()));
        }

        debug!(product = %product.id, quantity = quantity.get(), "adding cart line");

        self.lines.push(CartLine::new(key, product.price, quantity));

        Ok(self)
    }

    /// Change a line's quantity by `delta`. The quantity never drops below 1.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineNotFound`] if `index` is out of range.
    pub fn update_quantity(mut self, index: usize, delta: i64) -> Result<Self, CartError> {
        let line = self
            .lines
            .get_mut(index)
            .ok_or(CartError::LineNotFound(index))?;

        *line = line.with_delta(delta);

        debug!(line = index, delta, quantity = line.quantity(), "updated cart line quantity");

        Ok(self)
    }

    /// Remove a line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineNotFound`] if `index` is out of range.
    pub fn remove(mut self, index: usize) -> Result<Self, CartError> {
        if index >= self.lines.len() {
            return Err(CartError::LineNotFound(index));
        }

        let removed = self.lines.remove(index);

        debug!(line = index, quantity = removed.quantity(), "removed cart line");

        Ok(self)
    }

    /// Remove every line.
    #[must_use]
    pub fn clear(mut self) -> Self {
        self.lines.clear();
        self
    }

    /// Get a line from the cart.
    ///
    /// # Errors
    ///
    /// Returns a `CartError::LineNotFound` if the line is not found.
    pub fn get_line(&self, index: usize) -> Result<&CartLine<'a>, CartError> {
        self.lines.get(index).ok_or(CartError::LineNotFound(index))
    }

    /// Iterate over the lines in the cart.
    pub fn iter(&self) -> impl Iterator<Item = &CartLine<'a>> {
        self.lines.iter()
    }

    /// Get the number of lines in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(line.quantity()))
            .sum()
    }

    /// Get the currency of the cart.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{GBP, USD};
    use testresult::TestResult;

    use crate::{catalog::Catalog, test_support};

    use super::*;

    fn first_two(catalog: &Catalog<'static>) -> Vec<(ProductKey, Product<'static>)> {
        catalog
            .iter()
            .take(2)
            .map(|(key, product)| (key, product.clone()))
            .collect()
    }

    fn two_line_cart() -> Result<Cart<'static>, CartError> {
        let catalog = test_support::catalog();
        let products = first_two(&catalog);

        let mut cart = Cart::new(USD);

        for (key, product) in &products {
            cart = cart.add(*key, product, 1)?;
        }

        Ok(cart)
    }

    #[test]
    fn new_cart_is_empty() {
        let cart = Cart::new(USD);

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.currency(), USD);
    }

    #[test]
    fn with_lines_currency_mismatch_errors() -> TestResult {
        let one = NonZeroU32::new(1).ok_or("non-zero")?;
        let lines = [
            CartLine::new(ProductKey::default(), Money::from_minor(100, USD), one),
            CartLine::new(ProductKey::default(), Money::from_minor(100, GBP), one),
        ];

        let result = Cart::with_lines(lines, USD);

        assert_eq!(
            result.err(),
            Some(CartError::CurrencyMismatch(
                1,
                GBP.iso_alpha_code,
                USD.iso_alpha_code
            ))
        );

        Ok(())
    }

    #[test]
    fn add_merges_same_product() -> TestResult {
        let catalog = test_support::catalog();
        let (key, product) = catalog.iter().next().ok_or("catalog is empty")?;

        let cart = Cart::new(USD).add(key, product, 1)?.add(key, product, 2)?;

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get_line(0)?.quantity(), 3);

        Ok(())
    }

    #[test]
    fn add_rejects_zero_quantity() -> TestResult {
        let catalog = test_support::catalog();
        let (key, product) = catalog.iter().next().ok_or("catalog is empty")?;

        assert_eq!(
            Cart::new(USD).add(key, product, 0).err(),
            Some(CartError::ZeroQuantity)
        );

        Ok(())
    }

    #[test]
    fn add_rejects_foreign_currency() -> TestResult {
        let catalog = test_support::catalog();
        let (key, product) = catalog.iter().next().ok_or("catalog is empty")?;

        assert!(matches!(
            Cart::new(GBP).add(key, product, 1),
            Err(CartError::CurrencyMismatch(0, "USD", "GBP"))
        ));

        Ok(())
    }

    #[test]
    fn decrement_never_drops_below_one() -> TestResult {
        let cart = two_line_cart()?.update_quantity(0, -1)?;

        assert_eq!(cart.get_line(0)?.quantity(), 1);

        let cart = cart.update_quantity(0, -100)?;

        assert_eq!(cart.get_line(0)?.quantity(), 1);

        Ok(())
    }

    #[test]
    fn increment_and_decrement() -> TestResult {
        let cart = two_line_cart()?
            .update_quantity(1, 4)?
            .update_quantity(1, -2)?;

        assert_eq!(cart.get_line(1)?.quantity(), 3);
        assert_eq!(cart.get_line(0)?.quantity(), 1);
        assert_eq!(cart.item_count(), 4);

        Ok(())
    }

    #[test]
    fn huge_delta_saturates() -> TestResult {
        let cart = two_line_cart()?.update_quantity(0, i64::MAX)?;

        assert_eq!(cart.get_line(0)?.quantity(), u32::MAX);

        Ok(())
    }

    #[test]
    fn update_missing_line_errors() -> TestResult {
        let cart = two_line_cart()?;

        assert_eq!(
            cart.update_quantity(2, 1).err(),
            Some(CartError::LineNotFound(2))
        );

        Ok(())
    }

    #[test]
    fn remove_deletes_line_and_shifts_rest() -> TestResult {
        let cart = two_line_cart()?;
        let second = cart.get_line(1)?.product();

        let cart = cart.remove(0)?;

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get_line(0)?.product(), second);

        Ok(())
    }

    #[test]
    fn remove_missing_line_errors() {
        assert_eq!(
            Cart::new(USD).remove(0).err(),
            Some(CartError::LineNotFound(0))
        );
    }

    #[test]
    fn clear_empties_cart() -> TestResult {
        let cart = two_line_cart()?.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.currency(), USD);

        Ok(())
    }

    #[test]
    fn line_total_is_price_times_quantity() -> TestResult {
        let cart = two_line_cart()?.update_quantity(0, 1)?;

        assert_eq!(cart.get_line(0)?.line_total(), Decimal::new(59998, 2));

        Ok(())
    }
}
