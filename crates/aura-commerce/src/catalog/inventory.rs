//! Stock status derived from a product's availability count.

use serde::{Deserialize, Serialize};

/// At or below this many units a product counts as low stock / limited.
pub const LOW_STOCK_THRESHOLD: i64 = 5;

/// Stock status shown on product cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "remaining", rename_all = "kebab-case")]
pub enum StockStatus {
    /// Nothing left.
    OutOfStock,
    /// Only a few units left.
    LowStock(i64),
    /// Plenty available.
    InStock,
}

impl StockStatus {
    /// Classify an availability count.
    pub fn from_availability(availability: i64) -> Self {
        if availability <= 0 {
            StockStatus::OutOfStock
        } else if availability <= LOW_STOCK_THRESHOLD {
            StockStatus::LowStock(availability)
        } else {
            StockStatus::InStock
        }
    }

    /// Check if the product can be put in the cart.
    pub fn is_purchasable(&self) -> bool {
        !matches!(self, StockStatus::OutOfStock)
    }

    /// Short English label (e.g., "Only 3 left").
    pub fn label(&self) -> String {
        match self {
            StockStatus::OutOfStock => "Out of stock".to_string(),
            StockStatus::LowStock(n) => format!("Only {} left", n),
            StockStatus::InStock => "In stock".to_string(),
        }
    }
}
