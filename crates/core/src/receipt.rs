//! Receipt

use std::io;

use rust_decimal::Decimal;
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    cart::Cart,
    catalog::Catalog,
    pricing::{CartTotals, CheckoutPolicy, PricingError, percent_decimal, price_cart},
    products::ProductKey,
};

/// Errors that can occur when building or printing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Error pricing the cart.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// A cart line refers to a product missing from the catalog.
    #[error("Missing product")]
    MissingProduct(ProductKey),

    /// IO error
    #[error("IO error")]
    IO,
}

/// Priced cart, ready to print.
#[derive(Debug, Clone)]
pub struct CartReceipt<'c, 'a> {
    cart: &'c Cart<'a>,
    policy: CheckoutPolicy<'a>,
    totals: CartTotals,
}

impl<'c, 'a> CartReceipt<'c, 'a> {
    /// Price a cart for its receipt.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::Pricing`] if the cart cannot be priced under the policy.
    pub fn new(cart: &'c Cart<'a>, policy: CheckoutPolicy<'a>) -> Result<Self, ReceiptError> {
        let totals = price_cart(cart, &policy)?;

        Ok(Self {
            cart,
            policy,
            totals,
        })
    }

    /// The computed totals.
    pub fn totals(&self) -> &CartTotals {
        &self.totals
    }

    /// Prints the receipt: one row per cart line, then the summary.
    ///
    /// # Errors
    ///
    /// Returns an error if a product is missing from `catalog`, or the receipt cannot be written.
    pub fn write_to(&self, mut out: impl io::Write, catalog: &Catalog<'_>) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["", "Item", "Store", "Unit Price", "Qty", "Line Total"]);

        for (idx, line) in self.cart.iter().enumerate() {
            let product = catalog
                .get(line.product())
                .ok_or(ReceiptError::MissingProduct(line.product()))?;

            builder.push_record([
                format!("#{:<3}", idx + 1),
                product.name.clone(),
                product.seller.name.clone(),
                format!("{}", line.unit_price()),
                line.quantity().to_string(),
                format!("{}", self.totals.money(line.line_total())?),
            ]);
        }

        write_receipt_table(&mut out, builder)?;

        self.write_summary(&mut out)
    }

    fn write_summary(&self, out: &mut impl io::Write) -> Result<(), ReceiptError> {
        let totals = &self.totals;

        let shipping = if totals.free_shipping() {
            "Free".to_string()
        } else {
            format!("{}", totals.money(totals.shipping)?)
        };

        let tax_points = (percent_decimal(&self.policy.tax_rate) * Decimal::ONE_HUNDRED).normalize();

        let lines = [
            (" Subtotal:".to_string(), format!("{}", totals.money(totals.subtotal)?)),
            (" Shipping:".to_string(), shipping),
            (format!(" Estimated Tax ({tax_points}%):"), format!("{}", totals.money(totals.tax)?)),
            (" Total:".to_string(), format!("{}", totals.money(totals.total)?)),
        ];

        let label_width = lines.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        let value_width = lines.iter().map(|(_, value)| value.len()).max().unwrap_or(0);

        for (label, value) in &lines {
            writeln!(out, "{label:>label_width$}  {value:>value_width$}  ")
                .map_err(|_err| ReceiptError::IO)?;
        }

        writeln!(out).map_err(|_err| ReceiptError::IO)
    }
}

fn write_receipt_table(out: &mut impl io::Write, builder: Builder) -> Result<(), ReceiptError> {
    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(
        1,
        HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤')),
    );

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(3..6), Alignment::right());

    writeln!(out, "\n{table}").map_err(|_err| ReceiptError::IO)
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use crate::test_support;

    use super::*;

    #[test]
    fn write_to_renders_lines_and_summary() -> TestResult {
        let catalog = test_support::catalog();
        let (shoes_key, shoes) = catalog.find_by_id("3").ok_or("missing 3")?;
        let (tea_key, tea) = catalog.find_by_id("6").ok_or("missing 6")?;

        let cart = Cart::new(USD).add(shoes_key, shoes, 2)?.add(tea_key, tea, 1)?;
        let receipt = CartReceipt::new(&cart, CheckoutPolicy::standard(USD))?;

        let mut out = Vec::new();
        receipt.write_to(&mut out, &catalog)?;

        let output = String::from_utf8(out)?;

        assert!(output.contains("Nebula Running Shoes"));
        assert!(output.contains("SportFlex NYC"));
        assert!(output.contains("Zen Tea Set"));
        assert!(output.contains("Subtotal:"));
        assert!(output.contains("Shipping:"));
        assert!(output.contains("Free"));
        assert!(output.contains("Estimated Tax (8%):"));
        assert!(output.contains("Total:"));

        Ok(())
    }

    #[test]
    fn empty_cart_shows_flat_shipping() -> TestResult {
        let catalog = test_support::catalog();
        let cart = Cart::new(USD);
        let receipt = CartReceipt::new(&cart, CheckoutPolicy::standard(USD))?;

        let mut out = Vec::new();
        receipt.write_to(&mut out, &catalog)?;

        let output = String::from_utf8(out)?;

        assert!(output.contains("9.99"));
        assert!(!output.contains("Free"));

        Ok(())
    }

    #[test]
    fn write_to_errors_on_missing_product() -> TestResult {
        let catalog = test_support::catalog();
        let (key, product) = catalog.find_by_id("1").ok_or("missing 1")?;
        let cart = Cart::new(USD).add(key, product, 1)?;

        let receipt = CartReceipt::new(&cart, CheckoutPolicy::standard(USD))?;
        let result = receipt.write_to(Vec::new(), &Catalog::new());

        assert!(matches!(result, Err(ReceiptError::MissingProduct(_))));

        Ok(())
    }

    #[test]
    fn receipt_exposes_totals() -> TestResult {
        let cart = Cart::new(USD);
        let receipt = CartReceipt::new(&cart, CheckoutPolicy::standard(USD))?;

        assert!(!receipt.totals().free_shipping());

        Ok(())
    }
}
