//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(String),

    /// Product cannot be purchased right now.
    #[error("Product out of stock: {0}")]
    OutOfStock(String),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity exceeds maximum allowed.
    #[error("Quantity {0} exceeds maximum allowed ({1})")]
    QuantityExceedsLimit(i64, i64),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Checkout attempted with an empty cart.
    #[error("Cannot check out an empty cart")]
    EmptyCart,

    /// Checkout incomplete.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(String),

    /// Unknown enum code (category, language, payment method, ...).
    #[error("Unknown {kind}: {value}")]
    UnknownValue { kind: &'static str, value: String },

    /// Cache error.
    #[error("Cache error: {0}")]
    Cache(#[from] aura_cache::CacheError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error (catalog files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CommerceError {
    pub(crate) fn unknown(kind: &'static str, value: &str) -> Self {
        CommerceError::UnknownValue {
            kind,
            value: value.to_string(),
        }
    }
}
