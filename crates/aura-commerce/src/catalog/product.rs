//! Product types.

use crate::catalog::{ProductCategory, ProductGender, ProductType, StockStatus};
use crate::clock::now_secs;
use crate::ids::{NoteId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Position of a note in the fragrance pyramid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteTier {
    Top,
    Heart,
    Base,
}

/// A single fragrance note (e.g., "Vanille", base, gourmand).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FragranceNote {
    pub id: NoteId,
    pub name: String,
    #[serde(rename = "type")]
    pub tier: NoteTier,
    /// Olfactory family (e.g., "holz", "gourmand").
    pub category: String,
}

impl FragranceNote {
    pub fn new(
        id: impl Into<NoteId>,
        name: impl Into<String>,
        tier: NoteTier,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tier,
            category: category.into(),
        }
    }
}

/// Provenance of a decant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DecantInfo {
    /// Bottle the decant was drawn from (e.g., "Tom Ford Tobacco Vanille 50ml").
    pub original_bottle: String,
    /// Unix timestamp of decanting.
    pub decant_date: i64,
    pub batch_number: String,
    /// Whether the source bottle was verified authentic.
    pub authenticity: bool,
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub short_description: String,
    /// Selling price.
    pub price: Money,
    /// Price before reduction, shown struck through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    #[serde(default)]
    pub images: Vec<String>,
    pub category: ProductCategory,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub gender: ProductGender,
    #[serde(default)]
    pub notes: Vec<FragranceNote>,
    /// Human-readable concentration (e.g., "Eau de Parfum").
    #[serde(default)]
    pub concentration: String,
    /// Fill volume (e.g., "10ml").
    #[serde(default)]
    pub volume: String,
    /// Units in stock.
    pub availability: i64,
    #[serde(default)]
    pub is_limited: bool,
    #[serde(default)]
    pub is_exclusive: bool,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub is_on_sale: bool,
    /// Average rating, 0.0 to 5.0.
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decant_info: Option<DecantInfo>,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
}

impl Product {
    /// Create a product with the required fields; everything else defaults
    /// to an original unisex eau de parfum with no stock.
    pub fn new(
        id: impl Into<ProductId>,
        brand: impl Into<String>,
        name: impl Into<String>,
        price: Money,
    ) -> Self {
        let now = now_secs();
        Self {
            id: id.into(),
            name: name.into(),
            brand: brand.into(),
            description: String::new(),
            short_description: String::new(),
            price,
            original_price: None,
            images: Vec::new(),
            category: ProductCategory::EauDeParfum,
            product_type: ProductType::Original,
            gender: ProductGender::Unisex,
            notes: Vec::new(),
            concentration: String::new(),
            volume: String::new(),
            availability: 0,
            is_limited: false,
            is_exclusive: false,
            is_new: false,
            is_on_sale: false,
            rating: 0.0,
            review_count: 0,
            decant_info: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_classification(
        mut self,
        category: ProductCategory,
        product_type: ProductType,
        gender: ProductGender,
    ) -> Self {
        self.category = category;
        self.product_type = product_type;
        self.gender = gender;
        self
    }

    pub fn with_availability(mut self, availability: i64) -> Self {
        self.availability = availability;
        self
    }

    pub fn with_rating(mut self, rating: f64, review_count: u32) -> Self {
        self.rating = rating;
        self.review_count = review_count;
        self
    }

    pub fn with_original_price(mut self, original_price: Money) -> Self {
        self.original_price = Some(original_price);
        self
    }

    pub fn with_note(mut self, note: FragranceNote) -> Self {
        self.notes.push(note);
        self
    }

    pub fn created_at(mut self, timestamp: i64) -> Self {
        self.created_at = timestamp;
        self.updated_at = timestamp;
        self
    }

    /// Stock status for display.
    pub fn stock_status(&self) -> StockStatus {
        StockStatus::from_availability(self.availability)
    }

    /// Check if the product can be added to the cart.
    pub fn can_purchase(&self) -> bool {
        self.stock_status().is_purchasable()
    }

    /// Check if the product is sold below its original price.
    pub fn is_discounted(&self) -> bool {
        self.original_price
            .map(|op| op.amount_cents > self.price.amount_cents)
            .unwrap_or(false)
    }

    /// Calculate the discount percentage if discounted.
    pub fn discount_percentage(&self) -> Option<f64> {
        self.original_price.and_then(|op| {
            if op.amount_cents > self.price.amount_cents {
                let savings = op.amount_cents - self.price.amount_cents;
                Some((savings as f64 / op.amount_cents as f64) * 100.0)
            } else {
                None
            }
        })
    }

    /// Check if any note carries `name` (case-insensitive).
    pub fn has_note(&self, name: &str) -> bool {
        self.notes.iter().any(|n| n.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tobacco_vanille() -> Product {
        Product::new("2", "Tom Ford", "Tobacco Vanille", Money::eur(3200))
            .with_classification(
                ProductCategory::EauDeParfum,
                ProductType::Decant,
                ProductGender::Unisex,
            )
            .with_availability(3)
            .with_note(FragranceNote::new("4", "Vanille", NoteTier::Base, "gourmand"))
    }

    #[test]
    fn test_product_creation() {
        let p = tobacco_vanille();
        assert_eq!(p.id.as_str(), "2");
        assert_eq!(p.product_type, ProductType::Decant);
        assert_eq!(p.stock_status(), StockStatus::LowStock(3));
        assert!(p.can_purchase());
    }

    #[test]
    fn test_sold_out_cannot_be_purchased() {
        let p = tobacco_vanille().with_availability(0);
        assert!(!p.can_purchase());
    }

    #[test]
    fn test_discount() {
        let p = tobacco_vanille().with_original_price(Money::eur(4000));
        assert!(p.is_discounted());
        assert!((p.discount_percentage().unwrap() - 20.0).abs() < 0.01);

        let p = tobacco_vanille().with_original_price(Money::eur(3200));
        assert!(!p.is_discounted());
        assert!(p.discount_percentage().is_none());
    }

    #[test]
    fn test_has_note_ignores_case() {
        assert!(tobacco_vanille().has_note("vanille"));
        assert!(!tobacco_vanille().has_note("Tabak"));
    }

    #[test]
    fn test_product_json_uses_camel_case() {
        let json = serde_json::to_value(tobacco_vanille()).unwrap();
        assert_eq!(json["type"], "decant");
        assert_eq!(json["reviewCount"], 0);
        assert_eq!(json["isNew"], false);
        assert_eq!(json["notes"][0]["type"], "base");
        assert!(json.get("originalPrice").is_none());
    }
}
