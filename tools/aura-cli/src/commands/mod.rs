//! CLI command implementations.

pub mod cart;
pub mod checkout;
pub mod config;
pub mod home;
pub mod lang;
pub mod product;
pub mod shop;

use aura_commerce::catalog::{ProductCategory, ProductGender, ProductType};
use aura_commerce::checkout::PaymentMethod;
use aura_commerce::locale::Language;
use aura_commerce::search::{AvailabilityFilter, SortKey};
use clap::{Args, Subcommand};

/// Arguments for the shop command.
#[derive(Args)]
pub struct ShopArgs {
    /// Text to look for in name, brand or description.
    #[arg(short, long)]
    pub query: Option<String>,

    /// Only these brands (repeatable).
    #[arg(long = "brand")]
    pub brands: Vec<String>,

    /// Only these categories (repeatable).
    #[arg(long = "category")]
    pub categories: Vec<ProductCategory>,

    /// Only decants or originals (repeatable).
    #[arg(long = "type")]
    pub types: Vec<ProductType>,

    /// Only these genders (repeatable).
    #[arg(long = "gender")]
    pub genders: Vec<ProductGender>,

    /// Only products with one of these notes (repeatable).
    #[arg(long = "note")]
    pub notes: Vec<String>,

    /// Lowest price, in whole currency units.
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Highest price, in whole currency units.
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Availability: all, in-stock or limited.
    #[arg(long, default_value = "all")]
    pub availability: AvailabilityFilter,

    /// Sort order: newest, popular, price, rating or name.
    #[arg(short, long, default_value = "newest")]
    pub sort: SortKey,

    /// List brands, categories, types and genders to filter by.
    #[arg(long)]
    pub facets: bool,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID.
    pub id: String,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart with totals.
    Show,
    /// Add a product.
    Add {
        /// Product ID.
        id: String,
        /// Units to add.
        #[arg(short, long, default_value = "1")]
        qty: i64,
    },
    /// Remove a product line.
    Remove {
        /// Product ID.
        id: String,
    },
    /// Set the quantity of a line; 0 removes it.
    Set {
        /// Product ID.
        id: String,
        /// New quantity.
        #[arg(allow_negative_numbers = true)]
        qty: i64,
    },
    /// Empty the cart.
    Clear,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    #[arg(long, default_value = "")]
    pub first_name: String,

    #[arg(long, default_value = "")]
    pub last_name: String,

    /// Street and house number.
    #[arg(long, default_value = "")]
    pub street: String,

    #[arg(long, default_value = "")]
    pub city: String,

    #[arg(long, default_value = "")]
    pub postal_code: String,

    #[arg(long)]
    pub country: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    /// Bill to a different address; needs all billing fields.
    #[arg(long)]
    pub separate_billing: bool,

    #[arg(long, default_value = "")]
    pub billing_first_name: String,

    #[arg(long, default_value = "")]
    pub billing_last_name: String,

    #[arg(long, default_value = "")]
    pub billing_street: String,

    #[arg(long, default_value = "")]
    pub billing_city: String,

    #[arg(long, default_value = "")]
    pub billing_postal_code: String,

    #[arg(long)]
    pub billing_country: Option<String>,

    /// Payment method: stripe, apple-pay, paypal or klarna.
    #[arg(short, long, default_value = "stripe")]
    pub payment: PaymentMethod,

    /// Skip the simulated payment delay.
    #[arg(long)]
    pub no_delay: bool,
}

/// Arguments for the lang command.
#[derive(Args)]
pub struct LangArgs {
    #[command(subcommand)]
    pub command: Option<LangCommand>,
}

#[derive(Subcommand)]
pub enum LangCommand {
    /// Show the current language.
    Show,
    /// Switch language.
    Set {
        /// de or en.
        language: Language,
    },
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
