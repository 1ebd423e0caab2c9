//! GlobalRetailX prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError, CartLine},
    catalog::{Catalog, CatalogQuery, CategoryFilter, SortOrder, filter_products},
    commission::{CommissionError, CommissionRate, CommissionSplit},
    fixtures::{BUNDLED_FIXTURES, Fixture, FixtureError},
    orders::{Order, OrderLedger, OrderStatus},
    plans::{BillingCycle, PlanCurrency, PlanError, PlanPrice, PlanTier},
    pricing::{CartTotals, CheckoutPolicy, PricingError, price_cart},
    products::{Product, ProductKey, Seller, Swatch},
    receipt::{CartReceipt, ReceiptError},
    stores::{Store, StoreStatus},
};
