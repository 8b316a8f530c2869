//! Type-safe key-value persistence for the Aura Obscura storefront.
//!
//! Provides a small, ergonomic API for keeping device-local state (the cart,
//! the language preference) in a key-value store with automatic JSON
//! serialization.
//!
//! # Example
//!
//! ```rust
//! use aura_cache::{Cache, MemoryStore};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Prefs {
//!     language: String,
//! }
//!
//! let cache = Cache::new(MemoryStore::new());
//!
//! cache.set("prefs", &Prefs { language: "de".into() }).unwrap();
//! let prefs: Option<Prefs> = cache.get("prefs").unwrap();
//! assert_eq!(prefs.unwrap().language, "de");
//!
//! cache.delete("prefs").unwrap();
//! assert!(!cache.exists("prefs").unwrap());
//! ```

mod error;
mod kv;
mod store;

pub use error::CacheError;
pub use kv::Cache;
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KeyValueStore, MemoryStore};
}
