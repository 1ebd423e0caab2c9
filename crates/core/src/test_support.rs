//! Shared builders for unit tests.

use rust_decimal::Decimal;
use rusty_money::{Money, iso::USD};
use smallvec::smallvec;

use crate::{
    catalog::Catalog,
    products::{Product, Seller},
};

/// Build a USD product with the fields the catalog and cart care about.
pub(crate) fn product(
    id: &str,
    name: &str,
    price_minor: i64,
    category: &str,
    store: &str,
) -> Product<'static> {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        price: Money::from_minor(price_minor, USD),
        category: category.to_string(),
        seller: Seller {
            name: store.to_string(),
            country: String::new(),
        },
        rating: Decimal::new(45, 1),
        reviews: 100,
        has_3d_model: true,
        stock: 10,
        swatches: smallvec![],
    }
}

/// A small catalog mirroring the head of the marketplace sample set.
pub(crate) fn catalog() -> Catalog<'static> {
    let mut catalog = Catalog::new();

    let mut headphones = product(
        "1",
        "Quantum Pro Headphones",
        29999,
        "Electronics",
        "TechNova Berlin",
    );
    headphones.rating = Decimal::new(48, 1);
    headphones.reviews = 1247;

    let mut watch = product(
        "2",
        "Aurora Smart Watch",
        44999,
        "Electronics",
        "WristTech Tokyo",
    );
    watch.rating = Decimal::new(49, 1);
    watch.reviews = 2341;

    let mut shoes = product(
        "3",
        "Nebula Running Shoes",
        18999,
        "Fashion",
        "SportFlex NYC",
    );
    shoes.rating = Decimal::new(47, 1);
    shoes.reviews = 3456;

    let mut tea = product("6", "Zen Tea Set", 8999, "Home", "Ceramic Arts Kyoto");
    tea.rating = Decimal::new(49, 1);
    tea.reviews = 1890;

    catalog.insert(headphones);
    catalog.insert(watch);
    catalog.insert(shoes);
    catalog.insert(tea);

    catalog
}
