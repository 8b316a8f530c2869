//! Cart commands.

use anyhow::{bail, Result};
use aura_commerce::cart::{Cart, CartSummary};
use aura_commerce::ids::ProductId;
use aura_commerce::CommerceError;
use serde::Serialize;

use super::{CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => show_cart(ctx),
        CartCommand::Add { id, qty } => add_item(&id, qty, ctx),
        CartCommand::Remove { id } => remove_item(&id, ctx),
        CartCommand::Set { id, qty } => set_quantity(&id, qty, ctx),
        CartCommand::Clear => clear_cart(ctx),
    }
}

fn show_cart(ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let carts = ctx.cart_store(&store);
    let summary = carts.summary(&ctx.shipping_policy()?)?;
    print_cart(carts.cart(), &summary, ctx);
    Ok(())
}

fn add_item(id: &str, qty: i64, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let product = catalog.require(&ProductId::new(id))?;
    if !product.can_purchase() {
        return Err(CommerceError::OutOfStock(product.id.to_string()).into());
    }

    let store = ctx.open_store()?;
    let mut carts = ctx.cart_store(&store);
    carts.add(product, qty)?;

    let in_cart = carts.cart().quantity_of(&product.id);
    if in_cart > product.availability {
        ctx.output.warn(&format!(
            "Only {} of {} in stock",
            product.availability, product.name
        ));
    }
    ctx.output.success(&format!(
        "Added {} × {} {} ({} in cart)",
        qty, product.brand, product.name, in_cart
    ));
    print_summary_json(carts.cart(), ctx)
}

fn remove_item(id: &str, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let mut carts = ctx.cart_store(&store);
    let product_id = ProductId::new(id);
    if !carts.remove(&product_id) {
        return Err(CommerceError::ItemNotInCart(product_id.to_string()).into());
    }
    ctx.output.success(&format!("Removed {} from cart", product_id));
    print_summary_json(carts.cart(), ctx)
}

fn set_quantity(id: &str, qty: i64, ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let mut carts = ctx.cart_store(&store);
    let product_id = ProductId::new(id);
    if !carts.set_quantity(&product_id, qty)? {
        return Err(CommerceError::ItemNotInCart(product_id.to_string()).into());
    }
    if qty <= 0 {
        ctx.output.success(&format!("Removed {} from cart", product_id));
    } else {
        ctx.output
            .success(&format!("Set {} to {}", product_id, qty));
    }
    print_summary_json(carts.cart(), ctx)
}

fn clear_cart(ctx: &Context) -> Result<()> {
    let store = ctx.open_store()?;
    let mut carts = ctx.cart_store(&store);
    if carts.cart().is_empty() {
        ctx.output.info("Cart is already empty");
    } else {
        carts.clear();
        ctx.output.success("Cart cleared");
    }
    print_summary_json(carts.cart(), ctx)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CartView<'a> {
    cart: &'a Cart,
    summary: &'a CartSummary,
}

fn print_summary_json(cart: &Cart, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        let summary = CartSummary::compute(cart, &ctx.shipping_policy()?)?;
        ctx.output.json(&CartView {
            cart,
            summary: &summary,
        });
    }
    Ok(())
}

/// Print the cart lines and the totals block.
pub fn print_cart(cart: &Cart, summary: &CartSummary, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&CartView { cart, summary });
        return;
    }

    ctx.output.header(&format!("Cart ({} items)", cart.item_count()));
    if cart.is_empty() {
        ctx.output.info("Your cart is empty. Run `aura shop` to find something.");
        return;
    }

    let widths = [4, 38, 5, 12];
    ctx.output.table_row(&["ID", "Product", "Qty", "Total"], &widths);
    for item in cart.items() {
        let line_total = item
            .line_total()
            .map(|m| m.display())
            .unwrap_or_else(|| "-".to_string());
        ctx.output.table_row(
            &[
                item.product.id.as_str(),
                &format!("{} {}", item.product.brand, item.product.name),
                &item.quantity.to_string(),
                &line_total,
            ],
            &widths,
        );
    }

    ctx.output.rule();
    ctx.output.kv("subtotal", &summary.subtotal.display());
    if summary.has_free_shipping() {
        ctx.output.kv("shipping", "free");
    } else {
        ctx.output.kv("shipping", &summary.shipping.display());
    }
    ctx.output.kv("total", &summary.grand_total.display());
    if let Some(remaining) = summary.remaining_for_free_shipping {
        ctx.output.info(&format!(
            "Add {} more for free shipping",
            remaining.display()
        ));
    }
}

/// Fail early when there is nothing to check out.
pub fn ensure_not_empty(cart: &Cart) -> Result<()> {
    if cart.is_empty() {
        bail!(CommerceError::EmptyCart);
    }
    Ok(())
}
