//! Key-value store wrapper with automatic serialization.

use crate::{CacheError, KeyValueStore};
use serde::{de::DeserializeOwned, Serialize};

/// Type-safe cache over any [`KeyValueStore`].
///
/// Provides automatic JSON serialization for any type that implements
/// `Serialize` and `DeserializeOwned`.
#[derive(Debug, Clone)]
pub struct Cache<S> {
    store: S,
}

impl<S: KeyValueStore> Cache<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist, and a
    /// [`CacheError::SerializeError`] if the stored bytes are not valid JSON
    /// for `T`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let lang: Option<String> = cache.get("language")?;
    /// ```
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key)? {
            Some(bytes) => {
                let value: T = serde_json::from_slice(&bytes)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value in the cache.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// cache.set("@aura_obscura_cart", &cart)?;
    /// ```
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value)?;
        self.store.set(key, &bytes)
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.delete(key)
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.store.exists(key)
    }

    /// Get all keys in the cache.
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        self.store.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Entry {
        name: String,
        quantity: i64,
    }

    #[test]
    fn test_get_missing_is_none() {
        let cache = Cache::new(MemoryStore::new());
        let value: Option<Entry> = cache.get("missing").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_set_then_get() {
        let cache = Cache::new(MemoryStore::new());
        let entry = Entry {
            name: "Tobacco Vanille".to_string(),
            quantity: 2,
        };
        cache.set("entry", &entry).unwrap();
        assert_eq!(cache.get::<Entry>("entry").unwrap(), Some(entry));
    }

    #[test]
    fn test_invalid_json_is_serialize_error() {
        let cache = Cache::new(MemoryStore::new());
        cache.store().set("entry", b"{not json").unwrap();
        let err = cache.get::<Entry>("entry").unwrap_err();
        assert!(matches!(err, CacheError::SerializeError(_)));
    }
}
