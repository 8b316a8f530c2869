//! Checkout command.

use std::time::Duration;

use anyhow::{Context as _, Result};
use aura_commerce::checkout::{Address, CheckoutForm, Order};

use super::cart::{ensure_not_empty, print_cart};
use super::CheckoutArgs;
use crate::context::Context;
use crate::output::{format_timestamp, order_status_badge};

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let policy = ctx.shipping_policy()?;
    let store = ctx.open_store()?;
    let mut carts = ctx.cart_store(&store);

    ctx.output.step(1, 3, "Reviewing cart");
    ensure_not_empty(carts.cart())?;
    if !ctx.output.is_json() {
        let summary = carts.summary(&policy)?;
        print_cart(carts.cart(), &summary, ctx);
    }

    ctx.output.step(2, 3, "Checking addresses");
    let form = build_form(&args);
    form.validate().context("Please fill in all required fields")?;

    ctx.output.step(3, 3, "Processing payment");
    let delay = if args.no_delay {
        0
    } else {
        ctx.config.checkout.processing_delay_ms
    };
    let spinner = ctx.output.spinner(&format!(
        "Paying with {}...",
        form.payment_method.display_name()
    ));
    tokio::time::sleep(Duration::from_millis(delay)).await;
    let placed = Order::place(carts.cart(), &form, &policy);
    spinner.finish_and_clear();
    let order = placed?;

    carts.clear();
    tracing::info!(order = %order.id, "order placed, cart cleared");

    if ctx.output.is_json() {
        ctx.output.json(&order);
        return Ok(());
    }

    ctx.output
        .success(&format!("Order {} placed. Thank you!", order.id));
    ctx.output.kv("status", &order_status_badge(order.status));
    ctx.output.kv("items", &order.item_count().to_string());
    ctx.output.kv("total", &order.grand_total.display());
    ctx.output.kv("payment", order.payment_method.display_name());
    ctx.output.kv("ship to", &order.shipping_address.one_line());
    if order.billing_address != order.shipping_address {
        ctx.output.kv("bill to", &order.billing_address.one_line());
    }
    ctx.output.kv("placed", &format_timestamp(order.created_at));
    Ok(())
}

fn build_form(args: &CheckoutArgs) -> CheckoutForm {
    let mut shipping = Address::new(
        args.first_name.clone(),
        args.last_name.clone(),
        args.street.clone(),
        args.city.clone(),
        args.postal_code.clone(),
    );
    if let Some(ref country) = args.country {
        shipping = shipping.with_country(country.clone());
    }
    if let Some(ref phone) = args.phone {
        shipping = shipping.with_phone(phone.clone());
    }

    let mut form = CheckoutForm::new(shipping).with_payment_method(args.payment);
    if args.separate_billing {
        let mut billing = Address::new(
            args.billing_first_name.clone(),
            args.billing_last_name.clone(),
            args.billing_street.clone(),
            args.billing_city.clone(),
            args.billing_postal_code.clone(),
        );
        if let Some(ref country) = args.billing_country {
            billing = billing.with_country(country.clone());
        }
        form = form.with_billing_address(billing);
    }
    form
}
