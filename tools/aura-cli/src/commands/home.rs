//! Home page sections.

use anyhow::Result;
use aura_commerce::catalog::Product;
use serde::Serialize;

use crate::context::Context;
use crate::output::{product_row, product_table_header};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HomeSections<'a> {
    new_arrivals: Vec<&'a Product>,
    limited_editions: Vec<&'a Product>,
    exclusive_drops: Vec<&'a Product>,
}

/// Run the home command.
pub async fn run(ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let sections = HomeSections {
        new_arrivals: catalog.new_arrivals(),
        limited_editions: catalog.limited_editions(),
        exclusive_drops: catalog.exclusive_drops(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&sections);
        return Ok(());
    }

    print_section(ctx, "New Arrivals", &sections.new_arrivals);
    print_section(ctx, "Limited Editions", &sections.limited_editions);
    print_section(ctx, "Exclusive Drops", &sections.exclusive_drops);
    Ok(())
}

fn print_section(ctx: &Context, title: &str, products: &[&Product]) {
    ctx.output.header(title);
    if products.is_empty() {
        ctx.output.info("Nothing here right now.");
        return;
    }
    product_table_header(&ctx.output);
    for product in products {
        product_row(&ctx.output, product);
    }
}
