//! Search module.
//!
//! Contains the filter predicates, the sortable search query and its
//! results.

mod filter;
mod query;
mod results;

pub use filter::{AvailabilityFilter, Filter, PriceRange, ProductFilters};
pub use query::{SearchQuery, SortKey};
pub use results::SearchResults;
