//! Catalog
//!
//! The fixed product listing plus the storefront's search predicate. Filtering
//! keeps listing order; [`Catalog::search`] additionally applies a [`SortOrder`].

use slotmap::SlotMap;
use smallvec::SmallVec;
use tracing::debug;

use crate::products::{Product, ProductKey};

pub mod sort;

pub use sort::SortOrder;

/// Category selector for a catalog query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Match every category.
    #[default]
    All,

    /// Match one exact category label.
    Only(String),
}

impl CategoryFilter {
    /// Parse a selector, treating `all` (any case) or an empty string as the wildcard.
    pub fn parse(selector: &str) -> Self {
        let selector = selector.trim();

        if selector.is_empty() || selector.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(selector.to_string())
        }
    }

    /// Whether the category label is selected.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(label) => label == category,
        }
    }
}

/// Free-text query, category selector and sort order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    text: String,
    category: CategoryFilter,
    sort: SortOrder,
}

impl CatalogQuery {
    /// A query that matches everything in listing order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text query.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the category selector.
    #[must_use]
    pub fn category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Set the sort order used by [`Catalog::search`].
    #[must_use]
    pub fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// The sort order of this query.
    #[must_use]
    pub fn sort_order(&self) -> SortOrder {
        self.sort
    }

    /// Whether a product passes the category and text predicate.
    ///
    /// The text matches when empty, or when it is a case-insensitive substring
    /// of the product name or the store name.
    pub fn matches(&self, product: &Product<'_>) -> bool {
        self.category.matches(&product.category) && text_matches(&self.text, product)
    }
}

fn text_matches(text: &str, product: &Product<'_>) -> bool {
    if text.is_empty() {
        return true;
    }

    let needle = text.to_lowercase();

    product.name.to_lowercase().contains(&needle)
        || product.seller.name.to_lowercase().contains(&needle)
}

/// Filter products by a query, preserving input order.
///
/// Sort order is ignored here, so the output can be fed straight back in.
pub fn filter_products<'p, 'a: 'p>(
    products: impl IntoIterator<Item = &'p Product<'a>>,
    query: &CatalogQuery,
) -> Vec<&'p Product<'a>> {
    products
        .into_iter()
        .filter(|product| query.matches(product))
        .collect()
}

/// The product listing.
#[derive(Debug, Default)]
pub struct Catalog<'a> {
    products: SlotMap<ProductKey, Product<'a>>,
    listing: Vec<ProductKey>,
}

impl<'a> Catalog<'a> {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            products: SlotMap::with_key(),
            listing: Vec::new(),
        }
    }

    /// Append a product to the end of the listing.
    pub fn insert(&mut self, product: Product<'a>) -> ProductKey {
        let key = self.products.insert(product);

        self.listing.push(key);

        key
    }

    /// Get a product by key.
    pub fn get(&self, key: ProductKey) -> Option<&Product<'a>> {
        self.products.get(key)
    }

    /// Find a product by its identifier.
    pub fn find_by_id(&self, id: &str) -> Option<(ProductKey, &Product<'a>)> {
        self.iter().find(|(_, product)| product.id == id)
    }

    /// Iterate over products in listing order.
    pub fn iter(&self) -> impl Iterator<Item = (ProductKey, &Product<'a>)> {
        self.listing
            .iter()
            .filter_map(|key| self.products.get(*key).map(|product| (*key, product)))
    }

    /// Iterate over products in listing order, without keys.
    pub fn products(&self) -> impl Iterator<Item = &Product<'a>> {
        self.iter().map(|(_, product)| product)
    }

    /// Number of listed products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.listing.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listing.is_empty()
    }

    /// Distinct category labels, in first-seen listing order.
    pub fn categories(&self) -> SmallVec<[&str; 8]> {
        let mut categories: SmallVec<[&str; 8]> = SmallVec::new();

        for product in self.products() {
            if !categories.contains(&product.category.as_str()) {
                categories.push(product.category.as_str());
            }
        }

        categories
    }

    /// Products matching the query, in listing order.
    pub fn filter(&self, query: &CatalogQuery) -> Vec<&Product<'a>> {
        filter_products(self.products(), query)
    }

    /// Products matching the query, ordered by the query's sort order.
    pub fn search(&self, query: &CatalogQuery) -> Vec<&Product<'a>> {
        let mut results = self.filter(query);

        query.sort_order().apply(&mut results);

        debug!(
            text = %query.text,
            sort = %query.sort,
            matched = results.len(),
            total = self.len(),
            "searched catalog"
        );

        results
    }

    /// Other products in the same category as `key`, in listing order.
    pub fn related(&self, key: ProductKey, limit: usize) -> Vec<(ProductKey, &Product<'a>)> {
        let Some(product) = self.get(key) else {
            return Vec::new();
        };

        self.iter()
            .filter(|(other_key, other)| *other_key != key && other.category == product.category)
            .take(limit)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support;

    use super::*;

    fn names<'p>(products: &[&'p Product<'_>]) -> Vec<&'p str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn empty_query_returns_full_listing_in_order() {
        let catalog = test_support::catalog();

        let results = catalog.filter(&CatalogQuery::new());

        assert_eq!(
            names(&results),
            vec![
                "Quantum Pro Headphones",
                "Aurora Smart Watch",
                "Nebula Running Shoes",
                "Zen Tea Set",
            ]
        );
    }

    #[test]
    fn text_matches_store_name_case_insensitively() {
        let catalog = test_support::catalog();

        let results = catalog.filter(&CatalogQuery::new().text("TECHNOVA"));

        assert_eq!(names(&results), vec!["Quantum Pro Headphones"]);
    }

    #[test]
    fn text_matches_product_name() {
        let catalog = test_support::catalog();

        let results = catalog.filter(&CatalogQuery::new().text("watch"));

        assert_eq!(names(&results), vec!["Aurora Smart Watch"]);
    }

    #[test]
    fn category_and_text_must_both_match() {
        let catalog = test_support::catalog();

        let query = CatalogQuery::new()
            .text("tech")
            .category(CategoryFilter::parse("Fashion"));

        assert!(catalog.filter(&query).is_empty());
    }

    #[test]
    fn category_filter_is_exact() {
        let catalog = test_support::catalog();

        let lower = CatalogQuery::new().category(CategoryFilter::Only("home".to_string()));
        let exact = CatalogQuery::new().category(CategoryFilter::Only("Home".to_string()));

        assert!(catalog.filter(&lower).is_empty());
        assert_eq!(names(&catalog.filter(&exact)), vec!["Zen Tea Set"]);
    }

    #[test]
    fn category_filter_parses_wildcard() {
        assert_eq!(CategoryFilter::parse("All"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(""), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse(" Home "),
            CategoryFilter::Only("Home".to_string())
        );
    }

    #[test]
    fn filter_is_idempotent() {
        let catalog = test_support::catalog();
        let query = CatalogQuery::new().text("o");

        let once = catalog.filter(&query);
        let twice = filter_products(once.iter().copied(), &query);

        assert_eq!(names(&once), names(&twice));
    }

    #[test]
    fn filter_ignores_sort_order() {
        let catalog = test_support::catalog();

        let query = CatalogQuery::new().sort(SortOrder::PriceLowToHigh);

        assert_eq!(
            names(&catalog.filter(&query)),
            names(&catalog.filter(&CatalogQuery::new()))
        );
    }

    #[test]
    fn search_applies_sort_order() {
        let catalog = test_support::catalog();

        let query = CatalogQuery::new().sort(SortOrder::PriceLowToHigh);

        assert_eq!(
            names(&catalog.search(&query)),
            vec![
                "Zen Tea Set",
                "Nebula Running Shoes",
                "Quantum Pro Headphones",
                "Aurora Smart Watch",
            ]
        );
    }

    #[test]
    fn no_match_is_an_empty_result() {
        let catalog = test_support::catalog();

        assert!(catalog.filter(&CatalogQuery::new().text("zzz")).is_empty());
    }

    #[test]
    fn find_by_id_and_related() {
        let catalog = test_support::catalog();

        let Some((key, product)) = catalog.find_by_id("1") else {
            panic!("product 1 should exist");
        };

        assert_eq!(product.name, "Quantum Pro Headphones");

        let related: Vec<&str> = catalog
            .related(key, 3)
            .into_iter()
            .map(|(_, p)| p.name.as_str())
            .collect();

        assert_eq!(related, vec!["Aurora Smart Watch"]);
        assert!(catalog.find_by_id("missing").is_none());
    }

    #[test]
    fn categories_are_distinct_in_listing_order() {
        let catalog = test_support::catalog();

        assert_eq!(
            catalog.categories().to_vec(),
            vec!["Electronics", "Fashion", "Home"]
        );
    }
}
