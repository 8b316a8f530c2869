//! Aura CLI - Command line storefront for Aura Obscura.
//!
//! Commands:
//! - `aura shop` - Search, filter and sort the catalog
//! - `aura home` - New arrivals, limited editions and exclusive drops
//! - `aura product` - Show a single product
//! - `aura cart` - Inspect and edit the persisted cart
//! - `aura checkout` - Place an order for the cart
//! - `aura lang` - Show or change the UI language
//! - `aura config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CartArgs, CheckoutArgs, ConfigArgs, LangArgs, ProductArgs, ShopArgs};

/// Aura CLI - Browse the fragrance catalog and manage your cart
#[derive(Parser)]
#[command(name = "aura")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Directory the cart and language are stored in
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search, filter and sort the catalog
    Shop(ShopArgs),

    /// Show the home page sections
    Home,

    /// Show product details
    Product(ProductArgs),

    /// Inspect and edit the cart
    Cart(CartArgs),

    /// Place an order for the cart
    Checkout(CheckoutArgs),

    /// Show or change the UI language
    Lang(LangArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = match context::Context::load(cli.config.as_deref(), cli.data_dir, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match cli.command {
        Commands::Shop(args) => commands::shop::run(args, &ctx).await,
        Commands::Home => commands::home::run(&ctx).await,
        Commands::Product(args) => commands::product::run(args, &ctx).await,
        Commands::Cart(args) => commands::cart::run(args, &ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Lang(args) => commands::lang::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
