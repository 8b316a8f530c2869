//! Product filters.

use crate::catalog::{Product, ProductCategory, ProductGender, ProductType, LOW_STOCK_THRESHOLD};
use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Availability bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AvailabilityFilter {
    /// No restriction.
    #[default]
    All,
    /// At least one unit in stock.
    InStock,
    /// In stock, but no more than [`LOW_STOCK_THRESHOLD`] units.
    Limited,
}

impl AvailabilityFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            AvailabilityFilter::All => "all",
            AvailabilityFilter::InStock => "in-stock",
            AvailabilityFilter::Limited => "limited",
        }
    }

    pub fn matches(&self, availability: i64) -> bool {
        match self {
            AvailabilityFilter::All => true,
            AvailabilityFilter::InStock => availability > 0,
            AvailabilityFilter::Limited => availability > 0 && availability <= LOW_STOCK_THRESHOLD,
        }
    }
}

impl FromStr for AvailabilityFilter {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(AvailabilityFilter::All),
            "in-stock" => Ok(AvailabilityFilter::InStock),
            "limited" => Ok(AvailabilityFilter::Limited),
            _ => Err(CommerceError::unknown("availability", s)),
        }
    }
}

impl fmt::Display for AvailabilityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive price bounds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceRange {
    pub min: Money,
    pub max: Money,
}

impl PriceRange {
    pub fn new(min: Money, max: Money) -> Self {
        Self { min, max }
    }

    /// Check `min <= price <= max`. Prices in another currency never match.
    pub fn contains(&self, price: Money) -> bool {
        price.currency == self.min.currency
            && price.currency == self.max.currency
            && price.amount_cents >= self.min.amount_cents
            && price.amount_cents <= self.max.amount_cents
    }
}

impl Default for PriceRange {
    /// 0 € to 500 €.
    fn default() -> Self {
        Self::new(Money::eur(0), Money::eur(50_000))
    }
}

/// A single predicate over products.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Case-insensitive substring of name, brand or description.
    Text(String),
    /// Brand is one of these (exact).
    Brands(Vec<String>),
    Categories(Vec<ProductCategory>),
    Types(Vec<ProductType>),
    Genders(Vec<ProductGender>),
    /// Carries at least one of these notes (case-insensitive).
    Notes(Vec<String>),
    /// Price within bounds.
    PriceRange(PriceRange),
    /// Stock bucket.
    Availability(AvailabilityFilter),
}

impl Filter {
    /// Create a text search filter.
    pub fn text(query: impl Into<String>) -> Self {
        Filter::Text(query.into())
    }

    /// Check whether `product` passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Text(query) => {
                let needle = query.to_lowercase();
                product.name.to_lowercase().contains(&needle)
                    || product.brand.to_lowercase().contains(&needle)
                    || product.description.to_lowercase().contains(&needle)
            }
            Filter::Brands(brands) => brands.iter().any(|b| b == &product.brand),
            Filter::Categories(categories) => categories.contains(&product.category),
            Filter::Types(types) => types.contains(&product.product_type),
            Filter::Genders(genders) => genders.contains(&product.gender),
            Filter::Notes(notes) => notes.iter().any(|n| product.has_note(n)),
            Filter::PriceRange(range) => range.contains(product.price),
            Filter::Availability(mode) => mode.matches(product.availability),
        }
    }
}

/// Structured filter state of the shop's filter sheet.
///
/// Empty sets mean "no restriction".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilters {
    #[serde(default)]
    pub brands: Vec<String>,
    #[serde(default)]
    pub categories: Vec<ProductCategory>,
    #[serde(default)]
    pub types: Vec<ProductType>,
    #[serde(default)]
    pub genders: Vec<ProductGender>,
    #[serde(default)]
    pub notes: Vec<String>,
    #[serde(default)]
    pub price_range: PriceRange,
    #[serde(default)]
    pub availability: AvailabilityFilter,
}

impl ProductFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// The filters to run, in pipeline order. Unrestricted sets are skipped.
    pub fn to_filters(&self) -> Vec<Filter> {
        let mut filters = Vec::new();
        if !self.brands.is_empty() {
            filters.push(Filter::Brands(self.brands.clone()));
        }
        if !self.categories.is_empty() {
            filters.push(Filter::Categories(self.categories.clone()));
        }
        if !self.types.is_empty() {
            filters.push(Filter::Types(self.types.clone()));
        }
        if !self.genders.is_empty() {
            filters.push(Filter::Genders(self.genders.clone()));
        }
        if !self.notes.is_empty() {
            filters.push(Filter::Notes(self.notes.clone()));
        }
        filters.push(Filter::PriceRange(self.price_range));
        if self.availability != AvailabilityFilter::All {
            filters.push(Filter::Availability(self.availability));
        }
        filters
    }

    /// Number of active selections, shown on the filter button.
    pub fn active_count(&self) -> usize {
        self.brands.len()
            + self.categories.len()
            + self.types.len()
            + self.genders.len()
            + self.notes.len()
            + usize::from(self.availability != AvailabilityFilter::All)
            + usize::from(self.price_range != PriceRange::default())
    }

    pub fn is_default(&self) -> bool {
        self == &Self::default()
    }

    /// Restore every filter to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn toggle_brand(&mut self, brand: impl Into<String>) {
        toggle(&mut self.brands, brand.into());
    }

    pub fn toggle_category(&mut self, category: ProductCategory) {
        toggle(&mut self.categories, category);
    }

    pub fn toggle_type(&mut self, product_type: ProductType) {
        toggle(&mut self.types, product_type);
    }

    pub fn toggle_gender(&mut self, gender: ProductGender) {
        toggle(&mut self.genders, gender);
    }

    pub fn toggle_note(&mut self, note: impl Into<String>) {
        toggle(&mut self.notes, note.into());
    }

    /// Add `brand` unless it is already selected.
    pub fn select_brand(&mut self, brand: impl Into<String>) {
        select(&mut self.brands, brand.into());
    }

    pub fn select_category(&mut self, category: ProductCategory) {
        select(&mut self.categories, category);
    }

    pub fn select_type(&mut self, product_type: ProductType) {
        select(&mut self.types, product_type);
    }

    pub fn select_gender(&mut self, gender: ProductGender) {
        select(&mut self.genders, gender);
    }

    pub fn select_note(&mut self, note: impl Into<String>) {
        select(&mut self.notes, note.into());
    }

    pub fn set_price_range(&mut self, min: Money, max: Money) {
        self.price_range = PriceRange::new(min, max);
    }

    pub fn set_availability(&mut self, availability: AvailabilityFilter) {
        self.availability = availability;
    }
}

fn toggle<T: PartialEq>(values: &mut Vec<T>, value: T) {
    if let Some(pos) = values.iter().position(|v| v == &value) {
        values.remove(pos);
    } else {
        values.push(value);
    }
}

fn select<T: PartialEq>(values: &mut Vec<T>, value: T) {
    if !values.contains(&value) {
        values.push(value);
    }
}
