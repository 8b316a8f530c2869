//! Search query: text, filters and sort order.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::search::{Filter, ProductFilters, SearchResults};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort options for the shop listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Name A-Z, case-insensitive.
    Name,
    /// Price, low to high.
    Price,
    /// Highest rated first.
    Rating,
    /// Newest first.
    #[default]
    Newest,
    /// Most reviewed first.
    Popular,
}

impl SortKey {
    /// Order the sort button cycles through.
    pub const CYCLE: [SortKey; 5] = [
        SortKey::Newest,
        SortKey::Popular,
        SortKey::Price,
        SortKey::Rating,
        SortKey::Name,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Price => "price",
            SortKey::Rating => "rating",
            SortKey::Newest => "newest",
            SortKey::Popular => "popular",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Name => "Name: A-Z",
            SortKey::Price => "Price: Low to High",
            SortKey::Rating => "Highest Rated",
            SortKey::Newest => "Newest",
            SortKey::Popular => "Most Popular",
        }
    }

    /// The key after this one in [`SortKey::CYCLE`], wrapping around.
    pub fn next(&self) -> SortKey {
        let pos = Self::CYCLE.iter().position(|k| k == self).unwrap_or(0);
        Self::CYCLE[(pos + 1) % Self::CYCLE.len()]
    }

    /// Compare two products under this key.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Name => a
                .name
                .to_lowercase()
                .cmp(&b.name.to_lowercase())
                .then_with(|| a.name.cmp(&b.name)),
            SortKey::Price => a.price.amount_cents.cmp(&b.price.amount_cents),
            SortKey::Rating => b.rating.total_cmp(&a.rating),
            SortKey::Newest => b.created_at.cmp(&a.created_at),
            SortKey::Popular => b.review_count.cmp(&a.review_count),
        }
    }
}

impl FromStr for SortKey {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::CYCLE
            .iter()
            .copied()
            .find(|k| k.as_str() == needle)
            .ok_or_else(|| CommerceError::unknown("sort key", s))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A shop search.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SearchQuery {
    /// Free text; empty means no text restriction.
    pub query: String,
    /// Structured filters.
    pub filters: ProductFilters,
    /// Sort order.
    pub sort: SortKey,
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text query.
    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        self.query = q.into();
        self
    }

    /// Replace the structured filters.
    pub fn with_filters(mut self, filters: ProductFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// The predicate pipeline: text first, then the structured filters.
    pub fn pipeline(&self) -> Vec<Filter> {
        let mut filters = Vec::new();
        if !self.query.trim().is_empty() {
            filters.push(Filter::text(self.query.trim()));
        }
        filters.extend(self.filters.to_filters());
        filters
    }

    /// Run the query over `products`.
    ///
    /// Filters are applied in sequence, then the survivors are sorted
    /// (stable) by the chosen key.
    pub fn run<'a>(&self, products: &'a [Product]) -> SearchResults<'a> {
        let mut matched: Vec<&'a Product> = products.iter().collect();
        for filter in self.pipeline() {
            matched.retain(|p| filter.matches(p));
        }
        matched.sort_by(|a, b| self.sort.compare(a, b));

        tracing::debug!(
            query = %self.query,
            sort = %self.sort,
            matched = matched.len(),
            total = products.len(),
            "ran product search"
        );
        SearchResults::new(matched, products.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, ProductGender};
    use crate::money::Money;

    fn priced(id: &str, cents: i64) -> Product {
        Product::new(id, "Brand", id, Money::eur(cents))
    }

    #[test]
    fn test_sort_by_price_ascending() {
        let products = vec![priced("a", 3200), priced("b", 2800)];
        let results = SearchQuery::new().with_sort(SortKey::Price).run(&products);
        let prices: Vec<i64> = results.iter().map(|p| p.price.amount_cents).collect();
        assert_eq!(prices, vec![2800, 3200]);
    }

    #[test]
    fn test_empty_query_keeps_everything_in_order_before_sort() {
        let catalog = Catalog::sample();
        let pipeline = SearchQuery::new().pipeline();
        let mut kept: Vec<&Product> = catalog.products().iter().collect();
        for filter in &pipeline {
            kept.retain(|p| filter.matches(p));
        }
        let ids: Vec<&str> = kept.iter().map(|p| p.id.as_str()).collect();
        let expected: Vec<&str> = catalog.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_empty_query_returns_full_list() {
        let catalog = Catalog::sample();
        let results = SearchQuery::new().run(catalog.products());
        assert_eq!(results.len(), catalog.len());
        assert_eq!(results.total(), catalog.len());
    }

    #[test]
    fn test_sort_newest_first() {
        let products = vec![
            priced("old", 100).created_at(1_000),
            priced("new", 100).created_at(3_000),
            priced("mid", 100).created_at(2_000),
        ];
        let results = SearchQuery::new().run(&products);
        assert_eq!(results.ids(), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_sort_rating_and_popular_descending() {
        let products = vec![
            priced("a", 100).with_rating(4.2, 300),
            priced("b", 100).with_rating(4.9, 10),
            priced("c", 100).with_rating(4.5, 50),
        ];
        let by_rating = SearchQuery::new().with_sort(SortKey::Rating).run(&products);
        assert_eq!(by_rating.ids(), vec!["b", "c", "a"]);

        let by_reviews = SearchQuery::new().with_sort(SortKey::Popular).run(&products);
        assert_eq!(by_reviews.ids(), vec!["a", "c", "b"]);
    }

    #[test]
    fn test_sort_name_ignores_case() {
        let products = vec![
            Product::new("1", "X", "santal 33", Money::eur(1)),
            Product::new("2", "X", "Aventus", Money::eur(1)),
            Product::new("3", "X", "Oud Wood", Money::eur(1)),
        ];
        let results = SearchQuery::new().with_sort(SortKey::Name).run(&products);
        assert_eq!(results.ids(), vec!["2", "3", "1"]);
    }

    #[test]
    fn test_text_and_filters_combine() {
        let catalog = Catalog::sample();
        let mut filters = ProductFilters::new();
        filters.toggle_gender(ProductGender::Unisex);
        let results = SearchQuery::new()
            .with_query("maison")
            .with_filters(filters)
            .with_sort(SortKey::Price)
            .run(catalog.products());
        assert_eq!(results.ids(), vec!["7", "3"]);
    }

    #[test]
    fn test_default_price_range_excludes_expensive() {
        let products = vec![priced("cheap", 2800), priced("pricey", 60_000)];
        let results = SearchQuery::new().run(&products);
        assert_eq!(results.ids(), vec!["cheap"]);
    }

    #[test]
    fn test_sort_cycle_wraps() {
        let mut key = SortKey::default();
        let mut seen = vec![key];
        for _ in 0..5 {
            key = key.next();
            seen.push(key);
        }
        assert_eq!(
            seen,
            vec![
                SortKey::Newest,
                SortKey::Popular,
                SortKey::Price,
                SortKey::Rating,
                SortKey::Name,
                SortKey::Newest
            ]
        );
    }

    #[test]
    fn test_sort_key_from_str() {
        assert_eq!("Rating".parse::<SortKey>().unwrap(), SortKey::Rating);
        assert!("relevance".parse::<SortKey>().is_err());
    }
}
