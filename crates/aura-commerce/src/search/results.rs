//! Search results.

use crate::catalog::Product;
use serde::Serialize;

/// Products that survived a search, in display order.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchResults<'a> {
    products: Vec<&'a Product>,
    /// Size of the searched list before filtering.
    total: usize,
}

impl<'a> SearchResults<'a> {
    pub fn new(products: Vec<&'a Product>, total: usize) -> Self {
        Self { products, total }
    }

    pub fn products(&self) -> &[&'a Product] {
        &self.products
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Product> + '_ {
        self.products.iter().copied()
    }

    /// Number of matches.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Number of products searched.
    pub fn total(&self) -> usize {
        self.total
    }

    /// IDs of the matches, in order.
    pub fn ids(&self) -> Vec<&'a str> {
        self.products.iter().map(|p| p.id.as_str()).collect()
    }

    pub fn into_products(self) -> Vec<&'a Product> {
        self.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_results_accessors() {
        let a = Product::new("a", "Creed", "Aventus", Money::eur(28900));
        let b = Product::new("b", "Le Labo", "Santal 33", Money::eur(21500));
        let results = SearchResults::new(vec![&b], 2);
        assert_eq!(results.len(), 1);
        assert_eq!(results.total(), 2);
        assert_eq!(results.ids(), vec!["b"]);
        assert!(!results.is_empty());
        assert!(results.iter().all(|p| p.id != a.id));
    }

    #[test]
    fn test_empty_results() {
        let results = SearchResults::new(vec![], 9);
        assert!(results.is_empty());
        assert_eq!(results.total(), 9);
    }
}
