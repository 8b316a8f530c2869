//! Catalog module.
//!
//! Contains the product model, fragrance classification, stock status and
//! the in-memory catalog with its home-page sections.

mod catalog;
mod category;
mod fixtures;
mod inventory;
mod product;

pub use catalog::{Catalog, Facets};
pub use category::{ProductCategory, ProductGender, ProductType};
pub use inventory::{StockStatus, LOW_STOCK_THRESHOLD};
pub use product::{DecantInfo, FragranceNote, NoteTier, Product};
