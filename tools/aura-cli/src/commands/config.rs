//! Configuration management commands.

use std::fs;
use std::path::Path;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    // Storage section
    ctx.output.info("[storage]");
    ctx.output
        .kv("data_dir", &ctx.data_dir().display().to_string());
    ctx.output.kv("cart_key", &ctx.config.storage.cart_key);
    ctx.output.kv("language_key", &ctx.config.storage.language_key);

    // Shipping section
    ctx.output.info("[shipping]");
    match ctx.shipping_policy() {
        Ok(policy) => {
            ctx.output
                .kv("free above", &policy.free_threshold.display());
            ctx.output.kv("flat rate", &policy.flat_rate.display());
        }
        Err(e) => ctx.output.warn(&format!("{:#}", e)),
    }

    // Checkout section
    ctx.output.info("[checkout]");
    ctx.output.kv(
        "processing_delay_ms",
        &ctx.config.checkout.processing_delay_ms.to_string(),
    );

    // Catalog section
    ctx.output.info("[catalog]");
    ctx.output.kv(
        "path",
        ctx.config.catalog.path.as_deref().unwrap_or("(built-in sample)"),
    );

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("aura.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if let Err(e) = ctx.shipping_policy() {
        errors.push(format!("shipping.currency: {}", e));
    }
    if ctx.config.shipping.flat_rate_cents < 0 {
        errors.push("shipping.flat_rate_cents must not be negative".to_string());
    }
    if ctx.config.shipping.free_threshold_cents < 0 {
        errors.push("shipping.free_threshold_cents must not be negative".to_string());
    }
    if ctx.config.storage.cart_key.trim().is_empty() {
        errors.push("storage.cart_key is required".to_string());
    }
    if ctx.config.storage.language_key.trim().is_empty() {
        errors.push("storage.language_key is required".to_string());
    }
    if ctx.config.storage.cart_key == ctx.config.storage.language_key {
        errors.push("storage.cart_key and storage.language_key must differ".to_string());
    }
    if let Some(ref path) = ctx.config.catalog.path {
        let resolved = ctx.resolve_path(path);
        if !Path::new(&resolved).exists() {
            errors.push(format!("catalog.path '{}' does not exist", path));
        } else if let Err(e) = ctx.catalog() {
            errors.push(format!("catalog.path: {:#}", e));
        }
    }
    if ctx.config.checkout.processing_delay_ms > 30_000 {
        warnings.push("checkout.processing_delay_ms is over 30 seconds".to_string());
    }

    // Print results
    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}
