//! GlobalRetailX
//!
//! Catalog search, cart pricing and commission accounting for the GlobalRetailX
//! multi-vendor marketplace. Everything here is pure and synchronous: product
//! and order data is loaded once, and carts are updated by value.

pub mod cart;
pub mod catalog;
pub mod commission;
pub mod fixtures;
pub mod orders;
pub mod plans;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod receipt;
pub mod stores;

#[cfg(test)]
mod test_support;
