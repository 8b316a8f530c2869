//! In-memory product catalog.

use std::path::Path;

use crate::catalog::fixtures::sample_products;
use crate::catalog::{Product, ProductCategory, ProductGender, ProductType};
use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::Serialize;

/// A fixed, in-memory list of products.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

/// Distinct filter values present in a catalog, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Facets {
    pub brands: Vec<String>,
    pub categories: Vec<ProductCategory>,
    pub types: Vec<ProductType>,
    pub genders: Vec<ProductGender>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in demo catalog.
    pub fn sample() -> Self {
        Self::new(sample_products())
    }

    /// Load a catalog from a JSON array of products.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CommerceError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let products: Vec<Product> = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), count = products.len(), "loaded catalog");
        Ok(Self::new(products))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by ID.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product by ID, failing with `ProductNotFound`.
    pub fn require(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.get(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// "New in shop" section.
    pub fn new_arrivals(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_new).collect()
    }

    /// "Limited availability" section.
    pub fn limited_editions(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_limited).collect()
    }

    /// "Exclusive drops" section.
    pub fn exclusive_drops(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_exclusive).collect()
    }

    /// Distinct brands, categories, types and genders for the filter sheet.
    pub fn facets(&self) -> Facets {
        let mut facets = Facets::default();
        for p in &self.products {
            push_unique(&mut facets.brands, &p.brand);
            push_unique(&mut facets.categories, &p.category);
            push_unique(&mut facets.types, &p.product_type);
            push_unique(&mut facets.genders, &p.gender);
        }
        facets
    }
}

fn push_unique<T: PartialEq + Clone>(values: &mut Vec<T>, value: &T) {
    if !values.contains(value) {
        values.push(value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_sample_catalog_ids_are_unique() {
        let catalog = Catalog::sample();
        assert!(!catalog.is_empty());
        for (i, p) in catalog.products().iter().enumerate() {
            assert!(
                catalog.products()[i + 1..].iter().all(|q| q.id != p.id),
                "duplicate id {}",
                p.id
            );
        }
    }

    #[test]
    fn test_get_and_require() {
        let catalog = Catalog::sample();
        let id = ProductId::new("2");
        assert_eq!(catalog.get(&id).unwrap().name, "Tobacco Vanille");
        assert!(matches!(
            catalog.require(&ProductId::new("missing")),
            Err(CommerceError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_home_sections_follow_flags() {
        let catalog = Catalog::sample();
        assert!(catalog.new_arrivals().iter().all(|p| p.is_new));
        assert!(catalog.limited_editions().iter().all(|p| p.is_limited));
        assert!(catalog.exclusive_drops().iter().all(|p| p.is_exclusive));
        assert!(catalog.new_arrivals().iter().any(|p| p.id.as_str() == "1"));
        assert!(catalog.exclusive_drops().iter().any(|p| p.id.as_str() == "2"));
    }

    #[test]
    fn test_facets_first_seen_order() {
        let catalog = Catalog::new(vec![
            Product::new("a", "Tom Ford", "Oud Wood", Money::eur(3000)),
            Product::new("b", "Amouage", "Reflection Man", Money::eur(2800)),
            Product::new("c", "Tom Ford", "Tobacco Vanille", Money::eur(3200))
                .with_classification(
                    ProductCategory::Parfum,
                    ProductType::Decant,
                    ProductGender::Masculine,
                ),
        ]);
        let facets = catalog.facets();
        assert_eq!(facets.brands, vec!["Tom Ford", "Amouage"]);
        assert_eq!(
            facets.categories,
            vec![ProductCategory::EauDeParfum, ProductCategory::Parfum]
        );
        assert_eq!(facets.types, vec![ProductType::Original, ProductType::Decant]);
        assert_eq!(
            facets.genders,
            vec![ProductGender::Unisex, ProductGender::Masculine]
        );
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let products = vec![Product::new("x", "Byredo", "Gypsy Water", Money::eur(2400))];
        std::fs::write(&path, serde_json::to_string(&products).unwrap()).unwrap();

        let catalog = Catalog::from_json_file(&path).unwrap();
        assert_eq!(catalog.products(), products.as_slice());
    }

    #[test]
    fn test_from_json_file_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "{\"not\": \"a list\"}").unwrap();
        assert!(matches!(
            Catalog::from_json_file(&path),
            Err(CommerceError::Serialization(_))
        ));
    }
}
