//! Cart and cart item types.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per line item.
pub const MAX_QUANTITY_PER_ITEM: i64 = 9999;

/// A product in the cart together with how many units were picked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    /// Product snapshot taken when the line was first added.
    pub product: Product,
    /// Always positive.
    pub quantity: i64,
}

impl CartItem {
    /// Price × quantity, or `None` on overflow.
    pub fn line_total(&self) -> Option<Money> {
        self.product.price.try_multiply(self.quantity)
    }
}

/// A shopping cart.
///
/// `total` and `item_count` are never edited directly: every mutation builds
/// the new item list, recomputes both from it, and only then commits. A
/// failed mutation leaves the cart untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", try_from = "CartSnapshot")]
pub struct Cart {
    items: Vec<CartItem>,
    total: Money,
    item_count: i64,
    currency: Currency,
}

/// Wire shape of a persisted cart. Stored totals are ignored on load.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartSnapshot {
    items: Vec<CartItem>,
    #[serde(default)]
    currency: Option<Currency>,
}

impl TryFrom<CartSnapshot> for Cart {
    type Error = CommerceError;

    fn try_from(snapshot: CartSnapshot) -> Result<Self, Self::Error> {
        let currency = snapshot
            .currency
            .or_else(|| snapshot.items.first().map(|i| i.product.price.currency))
            .unwrap_or_default();
        if let Some(item) = snapshot.items.iter().find(|i| i.quantity <= 0) {
            return Err(CommerceError::InvalidQuantity(item.quantity));
        }
        Cart::with_items(snapshot.items, currency)
    }
}

impl Cart {
    /// Create an empty cart in the default currency.
    pub fn new() -> Self {
        Self::empty(Currency::default())
    }

    /// Create an empty cart in `currency`.
    pub fn empty(currency: Currency) -> Self {
        Self {
            items: Vec::new(),
            total: Money::zero(currency),
            item_count: 0,
            currency,
        }
    }

    fn with_items(items: Vec<CartItem>, currency: Currency) -> Result<Self, CommerceError> {
        let (total, item_count) = compute_totals(&items, currency)?;
        Ok(Self {
            items,
            total,
            item_count,
            currency,
        })
    }

    fn commit(&mut self, items: Vec<CartItem>) -> Result<(), CommerceError> {
        *self = Self::with_items(items, self.currency)?;
        Ok(())
    }

    /// Add `quantity` units of `product`.
    ///
    /// If the product is already in the cart its quantity is increased,
    /// otherwise a new line is appended.
    ///
    /// Returns an error if:
    /// - Quantity is not positive
    /// - The product is priced in another currency
    /// - Adding would exceed MAX_QUANTITY_PER_ITEM
    /// - Arithmetic overflow would occur
    pub fn add(&mut self, product: &Product, quantity: i64) -> Result<(), CommerceError> {
        if quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        if product.price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: product.price.currency.code().to_string(),
            });
        }

        let mut items = self.items.clone();
        match items.iter_mut().find(|i| i.product.id == product.id) {
            Some(existing) => {
                let new_quantity = existing
                    .quantity
                    .checked_add(quantity)
                    .ok_or(CommerceError::Overflow)?;
                check_limit(new_quantity)?;
                existing.quantity = new_quantity;
            }
            None => {
                check_limit(quantity)?;
                items.push(CartItem {
                    product: product.clone(),
                    quantity,
                });
            }
        }
        self.commit(items)
    }

    /// Remove the line for `product_id`. Returns whether a line was removed.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        let items: Vec<CartItem> = self
            .items
            .iter()
            .filter(|i| &i.product.id != product_id)
            .cloned()
            .collect();
        if items.len() == len_before {
            return false;
        }
        // Dropping lines only shrinks the sums, so this cannot overflow.
        self.commit(items).is_ok()
    }

    /// Set the quantity of the line for `product_id`.
    ///
    /// If quantity is <= 0, removes the line. Returns whether a line was
    /// found.
    pub fn set_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<bool, CommerceError> {
        if quantity <= 0 {
            return Ok(self.remove(product_id));
        }
        let mut items = self.items.clone();
        match items.iter_mut().find(|i| &i.product.id == product_id) {
            Some(item) => {
                check_limit(quantity)?;
                item.quantity = quantity;
                self.commit(items)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        *self = Self::empty(self.currency);
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Σ price × quantity.
    pub fn total(&self) -> Money {
        self.total
    }

    /// Σ quantity.
    pub fn item_count(&self) -> i64 {
        self.item_count
    }

    /// Number of distinct lines.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| &i.product.id == product_id)
    }

    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Quantity of `product_id` in the cart, 0 when absent.
    pub fn quantity_of(&self, product_id: &ProductId) -> i64 {
        self.get(product_id).map(|i| i.quantity).unwrap_or(0)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

fn check_limit(quantity: i64) -> Result<(), CommerceError> {
    if quantity > MAX_QUANTITY_PER_ITEM {
        return Err(CommerceError::QuantityExceedsLimit(
            quantity,
            MAX_QUANTITY_PER_ITEM,
        ));
    }
    Ok(())
}

fn compute_totals(items: &[CartItem], currency: Currency) -> Result<(Money, i64), CommerceError> {
    let mut total = Money::zero(currency);
    let mut count: i64 = 0;
    for item in items {
        let line = item.line_total().ok_or(CommerceError::Overflow)?;
        total = total.try_add(&line).ok_or_else(|| {
            if line.currency != currency {
                CommerceError::CurrencyMismatch {
                    expected: currency.code().to_string(),
                    got: line.currency.code().to_string(),
                }
            } else {
                CommerceError::Overflow
            }
        })?;
        count = count
            .checked_add(item.quantity)
            .ok_or(CommerceError::Overflow)?;
    }
    Ok((total, count))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, cents: i64) -> Product {
        Product::new(id, "Brand", format!("Product {}", id), Money::eur(cents)).with_availability(10)
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::eur(0));
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_item() {
        let mut cart = Cart::new();
        cart.add(&product("1", 2800), 2).unwrap();

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.total(), Money::eur(5600));
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let mut cart = Cart::new();
        let p = product("1", 2800);
        cart.add(&p, 1).unwrap();
        cart.add(&p, 2).unwrap();

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.quantity_of(&p.id), 3);
        assert_eq!(cart.total(), Money::eur(8400));
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let mut cart = Cart::new();
        cart.add(&product("b", 100), 1).unwrap();
        cart.add(&product("a", 100), 1).unwrap();
        cart.add(&product("b", 100), 1).unwrap();
        let ids: Vec<&str> = cart.items().iter().map(|i| i.product.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = Cart::new();
        let p = product("1", 1000);
        cart.add(&p, 1).unwrap();

        assert!(cart.set_quantity(&p.id, 5).unwrap());
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.total(), Money::eur(5000));
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        let p = product("1", 1000);
        cart.add(&p, 3).unwrap();

        assert!(cart.set_quantity(&p.id, 0).unwrap());
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::eur(0));
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_set_quantity_unknown_product() {
        let mut cart = Cart::new();
        assert!(!cart.set_quantity(&ProductId::new("nope"), 2).unwrap());
        assert!(!cart.set_quantity(&ProductId::new("nope"), 0).unwrap());
        assert!(!cart
            .set_quantity(&ProductId::new("nope"), MAX_QUANTITY_PER_ITEM + 1)
            .unwrap());
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        let a = product("a", 1000);
        let b = product("b", 2000);
        cart.add(&a, 1).unwrap();
        cart.add(&b, 2).unwrap();

        assert!(cart.remove(&a.id));
        assert!(!cart.remove(&a.id));
        assert_eq!(cart.total(), Money::eur(4000));
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&product("a", 1000), 4).unwrap();
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_quantity_limit() {
        let mut cart = Cart::new();
        let p = product("1", 1000);
        let result = cart.add(&p, MAX_QUANTITY_PER_ITEM + 1);
        assert!(matches!(result, Err(CommerceError::QuantityExceedsLimit(..))));

        cart.add(&p, MAX_QUANTITY_PER_ITEM).unwrap();
        assert!(cart.add(&p, 1).is_err());
        assert!(matches!(
            cart.set_quantity(&p.id, MAX_QUANTITY_PER_ITEM + 1),
            Err(CommerceError::QuantityExceedsLimit(..))
        ));
        assert_eq!(cart.quantity_of(&p.id), MAX_QUANTITY_PER_ITEM);
    }

    #[test]
    fn test_invalid_quantity() {
        let mut cart = Cart::new();
        let result = cart.add(&product("1", 1000), 0);
        assert!(matches!(result, Err(CommerceError::InvalidQuantity(0))));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_overflow_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add(&product("cheap", 100), 1).unwrap();
        let before = cart.clone();

        let result = cart.add(&product("huge", i64::MAX / 2), 3);
        assert!(matches!(result, Err(CommerceError::Overflow)));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_currency_mismatch_rejected() {
        let mut cart = Cart::new();
        let usd = Product::new("u", "Brand", "Import", Money::new(1000, Currency::USD));
        assert!(matches!(
            cart.add(&usd, 1),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_serialized_shape() {
        let mut cart = Cart::new();
        cart.add(&product("1", 2800), 2).unwrap();
        let json = serde_json::to_value(&cart).unwrap();
        assert!(json["items"].is_array());
        assert_eq!(json["items"][0]["quantity"], 2);
        assert_eq!(json["itemCount"], 2);
        assert_eq!(json["total"]["amount_cents"], 5600);
    }

    #[test]
    fn test_deserialize_recomputes_totals() {
        let mut cart = Cart::new();
        cart.add(&product("1", 2800), 2).unwrap();
        let mut json = serde_json::to_value(&cart).unwrap();
        json["itemCount"] = serde_json::json!(99);
        json["total"] = serde_json::json!({"amount_cents": 1, "currency": "EUR"});

        let loaded: Cart = serde_json::from_value(json).unwrap();
        assert_eq!(loaded.item_count(), 2);
        assert_eq!(loaded.total(), Money::eur(5600));
    }

    #[test]
    fn test_deserialize_rejects_non_positive_quantity() {
        let mut cart = Cart::new();
        cart.add(&product("1", 2800), 1).unwrap();
        let mut json = serde_json::to_value(&cart).unwrap();
        json["items"][0]["quantity"] = serde_json::json!(0);
        assert!(serde_json::from_value::<Cart>(json).is_err());
    }
}
