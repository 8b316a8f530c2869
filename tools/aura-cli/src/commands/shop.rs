//! Catalog search.

use anyhow::Result;
use aura_commerce::catalog::{Catalog, Product};
use aura_commerce::money::Money;
use aura_commerce::search::{ProductFilters, SearchQuery};
use serde::Serialize;

use super::ShopArgs;
use crate::context::Context;
use crate::output::{product_row, product_table_header};

/// Run the shop command.
pub async fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;

    if args.facets {
        return show_facets(&catalog, ctx);
    }

    let query = build_query(&args, ctx)?;
    let results = query.run(catalog.products());

    if ctx.output.is_json() {
        ctx.output.json(&ShopListing {
            query: &query,
            active_filters: query.filters.active_count(),
            total: results.total(),
            products: results.products(),
        });
        return Ok(());
    }

    ctx.output.header(&format!(
        "Shop: {} of {} products",
        results.len(),
        results.total()
    ));
    ctx.output.kv("sort", query.sort.display_name());
    let active = query.filters.active_count();
    if active > 0 {
        ctx.output.kv("active filters", &active.to_string());
    }

    if results.is_empty() {
        ctx.output.info("No products match. Try fewer filters.");
        return Ok(());
    }

    product_table_header(&ctx.output);
    for product in results.iter() {
        product_row(&ctx.output, product);
    }
    ctx.output.debug(&format!("next sort: {}", query.sort.next()));

    Ok(())
}

fn build_query(args: &ShopArgs, ctx: &Context) -> Result<SearchQuery> {
    let mut filters = ProductFilters::new();
    for brand in &args.brands {
        filters.select_brand(brand.clone());
    }
    for category in &args.categories {
        filters.select_category(*category);
    }
    for product_type in &args.types {
        filters.select_type(*product_type);
    }
    for gender in &args.genders {
        filters.select_gender(*gender);
    }
    for note in &args.notes {
        filters.select_note(note.clone());
    }
    if args.min_price.is_some() || args.max_price.is_some() {
        let currency = ctx.shipping_policy()?.currency();
        let default = filters.price_range;
        let min = args
            .min_price
            .map(|p| Money::from_decimal(p, currency))
            .unwrap_or(Money::new(default.min.amount_cents, currency));
        let max = args
            .max_price
            .map(|p| Money::from_decimal(p, currency))
            .unwrap_or(Money::new(default.max.amount_cents, currency));
        filters.set_price_range(min, max);
    }
    filters.set_availability(args.availability);

    let mut query = SearchQuery::new().with_filters(filters).with_sort(args.sort);
    if let Some(ref q) = args.query {
        query = query.with_query(q.clone());
    }
    Ok(query)
}

fn show_facets(catalog: &Catalog, ctx: &Context) -> Result<()> {
    let facets = catalog.facets();
    if ctx.output.is_json() {
        ctx.output.json(&facets);
        return Ok(());
    }

    ctx.output.header("Brands");
    for brand in &facets.brands {
        ctx.output.list_item(brand);
    }
    ctx.output.header("Categories");
    for category in &facets.categories {
        ctx.output
            .list_item(&format!("{} ({})", category.display_name(), category.as_str()));
    }
    ctx.output.header("Types");
    for product_type in &facets.types {
        ctx.output.list_item(&format!(
            "{} ({})",
            product_type.display_name(),
            product_type.as_str()
        ));
    }
    ctx.output.header("Genders");
    for gender in &facets.genders {
        ctx.output
            .list_item(&format!("{} ({})", gender.display_name(), gender.as_str()));
    }
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ShopListing<'a> {
    query: &'a SearchQuery,
    active_filters: usize,
    total: usize,
    products: &'a [&'a Product],
}
