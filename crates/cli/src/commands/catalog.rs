//! `catalog` command

use std::io::Write;

use clap::Args;
use globalretailx::{
    catalog::{CatalogQuery, CategoryFilter, SortOrder},
    fixtures::Fixture,
};
use tabled::{builder::Builder, settings::object::Columns};
use tracing::info;

use super::table;

/// Catalog search arguments.
#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Match product or store names containing this text (case-insensitive)
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Category label, or "all"
    #[arg(short, long, default_value = "all")]
    pub category: String,

    /// Sort order: listing, popular, price-low, price-high, rating, newest
    #[arg(short, long, default_value_t = SortOrder::Listing)]
    pub sort: SortOrder,
}

pub(crate) fn run(
    args: &CatalogArgs,
    fixture: &Fixture<'_>,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let query = CatalogQuery::new()
        .text(args.query.as_str())
        .category(CategoryFilter::parse(&args.category))
        .sort(args.sort);

    let results = fixture.catalog().search(&query);

    info!(
        query = %args.query,
        category = %args.category,
        sort = %args.sort,
        results = results.len(),
        "catalog search"
    );

    if results.is_empty() {
        writeln!(out, "No products match.")?;

        return Ok(());
    }

    let mut builder = Builder::default();

    builder.push_record([
        "ID", "Product", "Store", "Category", "Price", "Rating", "Reviews", "Stock",
    ]);

    for product in &results {
        builder.push_record([
            product.id.clone(),
            product.name.clone(),
            format!("{} ({})", product.seller.name, product.seller.country),
            product.category.clone(),
            format!("{}", product.price),
            product.rating.to_string(),
            product.reviews.to_string(),
            product.stock.to_string(),
        ]);
    }

    writeln!(out, "\n{}", table::render(builder, Columns::new(4..8)))?;
    writeln!(
        out,
        " {} of {} products, {}\n",
        results.len(),
        fixture.catalog().len(),
        args.sort.display_name()
    )?;

    Ok(())
}
