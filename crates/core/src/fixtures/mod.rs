//! Fixtures
//!
//! Sample marketplace data loaded from YAML. A fixture set is a name shared by
//! files under `products/`, `orders/`, `stores/` and `carts/` in the base path.

use std::{fs, path::PathBuf};

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use rusty_money::{Findable, iso::Currency};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

use crate::{
    cart::{Cart, CartError},
    catalog::Catalog,
    fixtures::{
        carts::CartsFixture, orders::OrdersFixture, products::ProductsFixture,
        stores::StoresFixture,
    },
    orders::Order,
    products::Product,
    stores::Store,
};

pub mod carts;
pub mod orders;
pub mod products;
pub mod stores;

/// Fixtures shipped with this crate.
pub const BUNDLED_FIXTURES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures");

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Invalid percentage format
    #[error("Invalid percentage format: {0}")]
    InvalidPercentage(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Rating outside 0.0 to 5.0
    #[error("Invalid rating: {0}")]
    InvalidRating(Decimal),

    /// Colour swatch is not a hex colour
    #[error("Invalid colour swatch: {0}")]
    InvalidSwatch(String),

    /// Two products share an identifier
    #[error("Duplicate product id: {0}")]
    DuplicateProduct(String),

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Cart not found
    #[error("Cart not found: {0}")]
    CartNotFound(String),

    /// Currency mismatch between fixtures
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No products loaded yet
    #[error("No products loaded yet; currency unknown")]
    NoCurrency,

    /// Cart creation error
    #[error("Failed to create cart: {0}")]
    Cart(#[from] CartError),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture<'a> {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Products, in listing order
    catalog: Catalog<'a>,

    /// Sample orders
    orders: Vec<Order<'a>>,

    /// Stores
    stores: Vec<Store<'a>>,

    /// Named carts
    carts: FxHashMap<String, Cart<'a>>,

    /// Currency for the fixture set
    currency: Option<&'static Currency>,
}

impl<'a> Fixture<'a> {
    /// Create a new empty fixture reading from [`BUNDLED_FIXTURES`]
    pub fn new() -> Self {
        Self::with_base_path(BUNDLED_FIXTURES)
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            catalog: Catalog::new(),
            orders: Vec::new(),
            stores: Vec::new(),
            carts: FxHashMap::default(),
            currency: None,
        }
    }

    fn read<T: DeserializeOwned>(&self, category: &str, name: &str) -> Result<T, FixtureError> {
        let file_path = self.base_path.join(category).join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;

        debug!(path = %file_path.display(), "loading fixture");

        Ok(serde_norway::from_str(&contents)?)
    }

    fn check_currency(&mut self, currency: &'static Currency) -> Result<(), FixtureError> {
        match self.currency {
            Some(existing) if existing != currency => Err(FixtureError::CurrencyMismatch(
                existing.iso_alpha_code.to_string(),
                currency.iso_alpha_code.to_string(),
            )),
            Some(_) => Ok(()),
            None => {
                self.currency = Some(currency);
                Ok(())
            }
        }
    }

    /// Load products from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, if an id repeats, or if there are
    /// currency mismatches.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: ProductsFixture = self.read("products", name)?;

        for product_fixture in fixture.products {
            let (_minor_units, currency) = products::parse_price(&product_fixture.price)?;

            self.check_currency(currency)?;

            let product: Product<'a> = product_fixture.try_into()?;

            if self.catalog.find_by_id(&product.id).is_some() {
                return Err(FixtureError::DuplicateProduct(product.id));
            }

            self.catalog.insert(product);
        }

        debug!(products = self.catalog.len(), "loaded products");

        Ok(self)
    }

    /// Load orders from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or if there are currency mismatches.
    pub fn load_orders(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: OrdersFixture = self.read("orders", name)?;

        for order_fixture in fixture.orders {
            for amount in [
                &order_fixture.total,
                &order_fixture.commission,
                &order_fixture.retailer_amount,
            ] {
                let (_minor_units, currency) = products::parse_price(amount)?;

                self.check_currency(currency)?;
            }

            self.orders.push(order_fixture.try_into()?);
        }

        Ok(self)
    }

    /// Load stores from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_stores(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: StoresFixture = self.read("stores", name)?;

        for store_fixture in fixture.stores {
            self.stores.push(store_fixture.try_into()?);
        }

        Ok(self)
    }

    /// Load carts from a YAML fixture file. Products must be loaded first.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or if a line refers to an unknown
    /// product or cannot be added to its cart.
    pub fn load_carts(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let fixture: CartsFixture = self.read("carts", name)?;

        for (cart_name, cart_fixture) in fixture.carts {
            let currency = Currency::find(&cart_fixture.currency)
                .ok_or_else(|| FixtureError::UnknownCurrency(cart_fixture.currency.clone()))?;

            let mut cart = Cart::new(currency);

            for line in cart_fixture.lines {
                let (key, product) = self
                    .catalog
                    .find_by_id(&line.product)
                    .ok_or_else(|| FixtureError::ProductNotFound(line.product.clone()))?;

                cart = cart.add(key, product, line.quantity)?;
            }

            self.carts.insert(cart_name, cart);
        }

        Ok(self)
    }

    /// Load a complete fixture set (products, stores, orders and carts with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn load_set(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        self.load_products(name)?
            .load_stores(name)?
            .load_orders(name)?
            .load_carts(name)
    }

    /// Load a complete fixture set from the default base path
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_set(name)?;

        Ok(fixture)
    }

    /// Get the catalog
    pub fn catalog(&self) -> &Catalog<'a> {
        &self.catalog
    }

    /// Get a product by its identifier
    ///
    /// # Errors
    ///
    /// Returns an error if the product is not found.
    pub fn product(&self, id: &str) -> Result<&Product<'a>, FixtureError> {
        self.catalog
            .find_by_id(id)
            .map(|(_key, product)| product)
            .ok_or_else(|| FixtureError::ProductNotFound(id.to_string()))
    }

    /// Get all orders
    pub fn orders(&self) -> &[Order<'a>] {
        &self.orders
    }

    /// Get all stores
    pub fn stores(&self) -> &[Store<'a>] {
        &self.stores
    }

    /// Get a cart by name
    ///
    /// # Errors
    ///
    /// Returns an error if no cart has that name.
    pub fn cart(&self, name: &str) -> Result<&Cart<'a>, FixtureError> {
        self.carts
            .get(name)
            .ok_or_else(|| FixtureError::CartNotFound(name.to_string()))
    }

    /// Names of the loaded carts, sorted
    pub fn cart_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.carts.keys().map(String::as_str).collect();

        names.sort_unstable();

        names
    }

    /// Get the currency
    ///
    /// # Errors
    ///
    /// Returns an error if no products or orders have been loaded yet.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        self.currency.ok_or(FixtureError::NoCurrency)
    }
}

impl Default for Fixture<'_> {
    fn default() -> Self {
        Self::new()
    }
}
