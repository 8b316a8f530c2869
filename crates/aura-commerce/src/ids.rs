//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing an OrderId where a ProductId is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix of every order number handed out by the storefront.
pub const ORDER_ID_PREFIX: &str = "AO-";

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(NoteId);
define_id!(OrderId);

impl OrderId {
    /// Build an order number from a unix timestamp in milliseconds.
    pub fn from_timestamp_millis(millis: i64) -> Self {
        Self(format!("{}{}", ORDER_ID_PREFIX, millis))
    }

    /// Generate an order number from the current time.
    pub fn generate() -> Self {
        Self::from_timestamp_millis(crate::clock::now_millis())
    }
}
