//! CLI configuration.

use anyhow::{anyhow, Context, Result};
use aura_commerce::cart::{ShippingPolicy, CART_STORAGE_KEY};
use aura_commerce::locale::LANGUAGE_STORAGE_KEY;
use aura_commerce::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Config file names, searched from the working directory upward.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["aura.toml", ".aura.toml", "aura.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where the cart and language live.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Shipping costs.
    #[serde(default)]
    pub shipping: ShippingConfig,

    /// Checkout behaviour.
    #[serde(default)]
    pub checkout: CheckoutConfig,

    /// Product source.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Build the shipping policy from the `[shipping]` section.
    pub fn shipping_policy(&self) -> Result<ShippingPolicy> {
        let currency = Currency::from_code(&self.shipping.currency)
            .ok_or_else(|| anyhow!("Unknown currency: {}", self.shipping.currency))?;
        Ok(ShippingPolicy::new(
            Money::new(self.shipping.free_threshold_cents, currency),
            Money::new(self.shipping.flat_rate_cents, currency),
        ))
    }
}

/// Storage configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Data directory, relative to the working directory. Defaults to the
    /// per-user data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,

    /// Key the cart is stored under.
    #[serde(default = "default_cart_key")]
    pub cart_key: String,

    /// Key the language is stored under.
    #[serde(default = "default_language_key")]
    pub language_key: String,
}

fn default_cart_key() -> String {
    CART_STORAGE_KEY.to_string()
}

fn default_language_key() -> String {
    LANGUAGE_STORAGE_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            cart_key: default_cart_key(),
            language_key: default_language_key(),
        }
    }
}

/// Shipping configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShippingConfig {
    /// Subtotals strictly above this ship free.
    #[serde(default = "default_free_threshold")]
    pub free_threshold_cents: i64,

    /// Charged below the threshold.
    #[serde(default = "default_flat_rate")]
    pub flat_rate_cents: i64,

    /// ISO currency code.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_free_threshold() -> i64 {
    5000
}

fn default_flat_rate() -> i64 {
    499
}

fn default_currency() -> String {
    Currency::EUR.code().to_string()
}

impl Default for ShippingConfig {
    fn default() -> Self {
        Self {
            free_threshold_cents: default_free_threshold(),
            flat_rate_cents: default_flat_rate(),
            currency: default_currency(),
        }
    }
}

/// Checkout configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Simulated payment processing time.
    #[serde(default = "default_processing_delay")]
    pub processing_delay_ms: u64,
}

fn default_processing_delay() -> u64 {
    2000
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: default_processing_delay(),
        }
    }
}

/// Catalog configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON product list. The built-in sample catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Generate a default aura.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Aura Obscura storefront configuration

[storage]
# data_dir = ".aura"
cart_key = "{cart_key}"
language_key = "{language_key}"

[shipping]
free_threshold_cents = {threshold}
flat_rate_cents = {flat_rate}
currency = "{currency}"

[checkout]
processing_delay_ms = {delay}

[catalog]
# path = "catalog.json"
"#,
        cart_key = CART_STORAGE_KEY,
        language_key = LANGUAGE_STORAGE_KEY,
        threshold = default_free_threshold(),
        flat_rate = default_flat_rate(),
        currency = default_currency(),
        delay = default_processing_delay(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_config_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: CliConfig = toml::from_str("[checkout]\nprocessing_delay_ms = 0\n").unwrap();
        assert_eq!(config.checkout.processing_delay_ms, 0);
        assert_eq!(config.storage.cart_key, "@aura_obscura_cart");
        assert_eq!(config.shipping.flat_rate_cents, 499);
    }

    #[test]
    fn test_shipping_policy() {
        let policy = CliConfig::default().shipping_policy().unwrap();
        assert_eq!(policy, ShippingPolicy::default());

        let mut config = CliConfig::default();
        config.shipping.currency = "XYZ".into();
        assert!(config.shipping_policy().is_err());
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("aura.json");
        std::fs::write(&path, r#"{"catalog": {"path": "catalog.json"}}"#).unwrap();

        let config = CliConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.catalog.path.as_deref(), Some("catalog.json"));
        assert_eq!(config.shipping, ShippingConfig::default());
    }
}
