//! Cart persisted to device-local storage.

use aura_cache::{Cache, KeyValueStore};

use crate::cart::{Cart, CartSummary, ShippingPolicy};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Storage key the cart is kept under.
pub const CART_STORAGE_KEY: &str = "@aura_obscura_cart";

/// Owns the cart and writes it back after every change.
///
/// Storage problems never surface to callers: a missing or corrupt entry
/// loads as an empty cart, and failed writes are logged and dropped.
pub struct CartStore<S> {
    cache: Cache<S>,
    key: String,
    cart: Cart,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Open the store under [`CART_STORAGE_KEY`].
    pub fn open(cache: Cache<S>) -> Self {
        Self::open_with_key(cache, CART_STORAGE_KEY)
    }

    /// Open the store under a custom key.
    pub fn open_with_key(cache: Cache<S>, key: impl Into<String>) -> Self {
        let key = key.into();
        let cart = load_cart(&cache, &key);
        Self { cache, key, cart }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Add `quantity` units of `product`.
    pub fn add(&mut self, product: &Product, quantity: i64) -> Result<(), CommerceError> {
        self.cart.add(product, quantity)?;
        tracing::debug!(product = %product.id, quantity, "added to cart");
        self.persist();
        Ok(())
    }

    /// Remove a line. Returns whether anything was removed.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let removed = self.cart.remove(product_id);
        if removed {
            tracing::debug!(product = %product_id, "removed from cart");
            self.persist();
        }
        removed
    }

    /// Set a line's quantity; `<= 0` removes it.
    pub fn set_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        let found = self.cart.set_quantity(product_id, quantity)?;
        if found {
            tracing::debug!(product = %product_id, quantity, "updated cart quantity");
            self.persist();
        }
        Ok(found)
    }

    pub fn clear(&mut self) {
        self.cart.clear();
        tracing::debug!("cleared cart");
        self.persist();
    }

    pub fn summary(&self, policy: &ShippingPolicy) -> Result<CartSummary, CommerceError> {
        CartSummary::compute(&self.cart, policy)
    }

    fn persist(&self) {
        if let Err(e) = self.cache.set(&self.key, &self.cart) {
            tracing::error!(key = %self.key, error = %e, "failed to save cart");
        }
    }
}

/// Read the cart, falling back to an empty one on any problem.
fn load_cart<S: KeyValueStore>(cache: &Cache<S>, key: &str) -> Cart {
    let raw: serde_json::Value = match cache.get(key) {
        Ok(Some(value)) => value,
        Ok(None) => return Cart::new(),
        Err(e) => {
            tracing::error!(key, error = %e, "failed to load cart, starting empty");
            return Cart::new();
        }
    };

    let has_items = raw
        .as_object()
        .and_then(|obj| obj.get("items"))
        .map(|items| items.is_array())
        .unwrap_or(false);
    if !has_items {
        tracing::warn!(key, "invalid cart data found, resetting");
        return Cart::new();
    }

    match serde_json::from_value::<Cart>(raw) {
        Ok(cart) => {
            tracing::debug!(key, lines = cart.unique_item_count(), "loaded cart");
            cart
        }
        Err(e) => {
            tracing::warn!(key, error = %e, "invalid cart data found, resetting");
            Cart::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use aura_cache::{CacheError, MemoryStore};
    use std::sync::Arc;

    fn product(id: &str, cents: i64) -> Product {
        Product::new(id, "Tom Ford", "Tobacco Vanille", Money::eur(cents)).with_availability(3)
    }

    /// Store whose writes always fail.
    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
            self.0.get(key)
        }

        fn set(&self, _key: &str, _value: &[u8]) -> Result<(), CacheError> {
            Err(CacheError::StoreError("read-only".to_string()))
        }

        fn delete(&self, _key: &str) -> Result<(), CacheError> {
            Err(CacheError::StoreError("read-only".to_string()))
        }

        fn keys(&self) -> Result<Vec<String>, CacheError> {
            self.0.keys()
        }
    }

    /// Store whose reads always fail.
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, CacheError> {
            Err(CacheError::StoreError("disk on fire".to_string()))
        }

        fn set(&self, _key: &str, _value: &[u8]) -> Result<(), CacheError> {
            Ok(())
        }

        fn delete(&self, _key: &str) -> Result<(), CacheError> {
            Ok(())
        }

        fn keys(&self) -> Result<Vec<String>, CacheError> {
            Ok(vec![])
        }
    }

    #[test]
    fn test_missing_key_loads_empty() {
        let store = CartStore::open(Cache::new(MemoryStore::new()));
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_mutations_are_persisted() {
        let shared = Arc::new(MemoryStore::new());
        let mut store = CartStore::open(Cache::new(Arc::clone(&shared)));
        store.add(&product("2", 3200), 2).unwrap();

        let reopened = CartStore::open(Cache::new(shared));
        assert_eq!(reopened.cart().item_count(), 2);
        assert_eq!(reopened.cart().total(), Money::eur(6400));
    }

    #[test]
    fn test_clear_is_persisted() {
        let shared = Arc::new(MemoryStore::new());
        let mut store = CartStore::open(Cache::new(Arc::clone(&shared)));
        store.add(&product("2", 3200), 1).unwrap();
        store.clear();

        let reopened = CartStore::open(Cache::new(shared));
        assert!(reopened.cart().is_empty());
    }

    #[test]
    fn test_non_object_resets() {
        let cache = Cache::new(MemoryStore::new());
        cache.set(CART_STORAGE_KEY, &serde_json::json!([1, 2, 3])).unwrap();
        assert!(CartStore::open(cache).cart().is_empty());
    }

    #[test]
    fn test_items_not_array_resets() {
        let cache = Cache::new(MemoryStore::new());
        cache
            .set(CART_STORAGE_KEY, &serde_json::json!({"items": "nope", "total": 0}))
            .unwrap();
        assert!(CartStore::open(cache).cart().is_empty());
    }

    #[test]
    fn test_unparsable_bytes_reset() {
        let cache = Cache::new(MemoryStore::new());
        cache.store().set(CART_STORAGE_KEY, b"{\"items\": [").unwrap();
        assert!(CartStore::open(cache).cart().is_empty());
    }

    #[test]
    fn test_malformed_item_resets() {
        let cache = Cache::new(MemoryStore::new());
        cache
            .set(
                CART_STORAGE_KEY,
                &serde_json::json!({"items": [{"product": {"id": "1"}, "quantity": 1}]}),
            )
            .unwrap();
        assert!(CartStore::open(cache).cart().is_empty());
    }

    #[test]
    fn test_read_failure_starts_empty() {
        let store = CartStore::open(Cache::new(BrokenStore));
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let mut store = CartStore::open(Cache::new(ReadOnlyStore(MemoryStore::new())));
        store.add(&product("2", 3200), 1).unwrap();
        assert_eq!(store.cart().item_count(), 1);
        store.clear();
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_failed_mutation_is_not_persisted() {
        let shared = Arc::new(MemoryStore::new());
        let mut store = CartStore::open(Cache::new(Arc::clone(&shared)));
        assert!(store.add(&product("2", 3200), 0).is_err());
        assert!(!shared.exists(CART_STORAGE_KEY).unwrap());
    }

    #[test]
    fn test_custom_key() {
        let shared = Arc::new(MemoryStore::new());
        let mut store = CartStore::open_with_key(Cache::new(Arc::clone(&shared)), "cart:test");
        store.add(&product("2", 3200), 1).unwrap();
        assert_eq!(store.key(), "cart:test");
        assert!(shared.exists("cart:test").unwrap());
    }
}
