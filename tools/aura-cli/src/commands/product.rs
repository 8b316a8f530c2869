//! Product details.

use anyhow::Result;
use aura_commerce::catalog::NoteTier;
use aura_commerce::ids::ProductId;

use super::ProductArgs;
use crate::context::Context;
use crate::output::{format_date, format_price, format_rating, stock_badge};

/// Run the product command.
pub async fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let product = catalog.require(&ProductId::new(args.id))?;

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    ctx.output.header(&format!("{} {}", product.brand, product.name));
    ctx.output
        .kv("price", &format_price(product.price, product.original_price));
    if let Some(percent) = product.discount_percentage() {
        ctx.output.kv("discount", &format!("-{:.0}%", percent));
    }
    ctx.output.kv("stock", &stock_badge(product.stock_status()));
    ctx.output.kv(
        "type",
        &format!(
            "{} · {} · {}",
            product.product_type.display_name(),
            product.category.display_name(),
            product.gender.display_name()
        ),
    );
    if !product.concentration.is_empty() {
        ctx.output.kv("concentration", &product.concentration);
    }
    if !product.volume.is_empty() {
        ctx.output.kv("volume", &product.volume);
    }
    if product.review_count > 0 {
        ctx.output
            .kv("rating", &format_rating(product.rating, product.review_count));
    }

    let mut badges = Vec::new();
    if product.is_new {
        badges.push("new");
    }
    if product.is_limited {
        badges.push("limited");
    }
    if product.is_exclusive {
        badges.push("exclusive");
    }
    if product.is_on_sale {
        badges.push("sale");
    }
    if !badges.is_empty() {
        ctx.output.kv("tags", &badges.join(", "));
    }

    if !product.description.is_empty() {
        ctx.output.rule();
        println!("{}", product.description);
        ctx.output.rule();
    }

    for (tier, title) in [
        (NoteTier::Top, "Top notes"),
        (NoteTier::Heart, "Heart notes"),
        (NoteTier::Base, "Base notes"),
    ] {
        let names: Vec<&str> = product
            .notes
            .iter()
            .filter(|n| n.tier == tier)
            .map(|n| n.name.as_str())
            .collect();
        if !names.is_empty() {
            ctx.output.kv(title, &names.join(", "));
        }
    }

    if let Some(ref decant) = product.decant_info {
        ctx.output.header("Decant");
        ctx.output.kv("from", &decant.original_bottle);
        ctx.output.kv("decanted", &format_date(decant.decant_date));
        ctx.output.kv("batch", &decant.batch_number);
        ctx.output.kv(
            "authenticity",
            if decant.authenticity { "verified" } else { "unverified" },
        );
    }

    Ok(())
}
