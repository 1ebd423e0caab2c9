//! Products

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use slotmap::new_key_type;
use smallvec::SmallVec;

new_key_type! {
    /// Product Key
    pub struct ProductKey;
}

/// A selectable colour swatch, held as a CSS hex colour (e.g. `#1a1a2e`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch(String);

impl Swatch {
    /// Create a swatch from a `#rgb` or `#rrggbb` hex string.
    ///
    /// Returns `None` if the string is not a hex colour.
    pub fn new(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;

        let valid_len = digits.len() == 3 || digits.len() == 6;

        if valid_len && digits.chars().all(|c| c.is_ascii_hexdigit()) {
            Some(Self(hex.to_ascii_lowercase()))
        } else {
            None
        }
    }

    /// The normalised (lowercase) hex string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The store a product is listed by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seller {
    /// Store display name
    pub name: String,

    /// Store country label
    pub country: String,
}

/// Product
#[derive(Debug, Clone)]
pub struct Product<'a> {
    /// Product identifier
    pub id: String,

    /// Product name
    pub name: String,

    /// Unit price
    pub price: Money<'a, Currency>,

    /// Category label
    pub category: String,

    /// Originating store
    pub seller: Seller,

    /// Average rating, between 0.0 and 5.0
    pub rating: Decimal,

    /// Number of reviews
    pub reviews: u32,

    /// Whether an interactive 3D preview exists
    pub has_3d_model: bool,

    /// Available stock
    pub stock: u32,

    /// Selectable colour swatches
    pub swatches: SmallVec<[Swatch; 3]>,
}

impl Product<'_> {
    /// ISO currency code of the unit price.
    #[must_use]
    pub fn currency_code(&self) -> &'static str {
        self.price.currency().iso_alpha_code
    }

    /// Whether the product has any stock left.
    #[must_use]
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}
