//! Storefront domain types and logic for Aura Obscura.
//!
//! This crate provides the pieces of the fragrance shop that are independent
//! of any screen:
//!
//! - **Catalog**: Products, fragrance notes, classification, stock status
//! - **Cart**: Shopping cart with derived totals, shipping, persistence
//! - **Search**: Text search, filters and sort keys for the shop listing
//! - **Checkout**: Addresses, payment choice, placed orders
//! - **Locale**: The persisted UI language
//!
//! # Example
//!
//! ```rust
//! use aura_cache::{Cache, MemoryStore};
//! use aura_commerce::prelude::*;
//!
//! let catalog = Catalog::sample();
//! let mut store = CartStore::open(Cache::new(MemoryStore::new()));
//!
//! let product = catalog.require(&ProductId::new("2")).unwrap();
//! store.add(product, 2).unwrap();
//!
//! let summary = store.summary(&ShippingPolicy::default()).unwrap();
//! assert_eq!(summary.item_count, 2);
//! println!("Total: {}", summary.grand_total.display());
//! ```

pub mod clock;
pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod locale;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        Catalog, FragranceNote, NoteTier, Product, ProductCategory, ProductGender, ProductType,
        StockStatus,
    };

    // Cart
    pub use crate::cart::{Cart, CartItem, CartStore, CartSummary, ShippingPolicy};

    // Checkout
    pub use crate::checkout::{Address, CheckoutForm, Order, OrderStatus, PaymentMethod};

    // Search
    pub use crate::search::{
        AvailabilityFilter, Filter, PriceRange, ProductFilters, SearchQuery, SearchResults,
        SortKey,
    };

    // Locale
    pub use crate::locale::{Language, LanguageStore};
}
