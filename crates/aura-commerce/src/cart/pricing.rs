//! Cart pricing: shipping policy and order summary.

use crate::cart::Cart;
use crate::error::CommerceError;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Flat-rate shipping that becomes free above a threshold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShippingPolicy {
    /// Subtotals strictly above this ship for free.
    pub free_threshold: Money,
    /// Charged otherwise.
    pub flat_rate: Money,
}

impl ShippingPolicy {
    pub fn new(free_threshold: Money, flat_rate: Money) -> Self {
        Self {
            free_threshold,
            flat_rate,
        }
    }

    pub fn currency(&self) -> Currency {
        self.free_threshold.currency
    }

    /// Shipping charged for `subtotal`.
    pub fn shipping_for(&self, subtotal: Money) -> Money {
        if subtotal.amount_cents > self.free_threshold.amount_cents {
            Money::zero(subtotal.currency)
        } else {
            self.flat_rate
        }
    }

    /// How much more must be spent to reach the threshold, if below it.
    pub fn remaining_for_free(&self, subtotal: Money) -> Option<Money> {
        if subtotal.amount_cents < self.free_threshold.amount_cents {
            self.free_threshold.try_subtract(&subtotal)
        } else {
            None
        }
    }
}

impl Default for ShippingPolicy {
    /// Free above 50 €, otherwise 4.99 €.
    fn default() -> Self {
        Self::new(Money::eur(5000), Money::eur(499))
    }
}

/// Complete pricing breakdown for a cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    /// Σ price × quantity.
    pub subtotal: Money,
    /// Shipping cost; zero for an empty cart.
    pub shipping: Money,
    /// subtotal + shipping.
    pub grand_total: Money,
    /// Present while the subtotal is below the free-shipping threshold.
    pub remaining_for_free_shipping: Option<Money>,
    /// Σ quantity.
    pub item_count: i64,
}

impl CartSummary {
    /// Price `cart` under `policy`.
    ///
    /// Returns error if the policy and cart currencies differ or arithmetic
    /// overflows.
    pub fn compute(cart: &Cart, policy: &ShippingPolicy) -> Result<Self, CommerceError> {
        if policy.currency() != cart.currency() || policy.flat_rate.currency != cart.currency() {
            return Err(CommerceError::CurrencyMismatch {
                expected: cart.currency().code().to_string(),
                got: policy.currency().code().to_string(),
            });
        }

        let subtotal = cart.total();
        let (shipping, remaining) = if cart.is_empty() {
            (Money::zero(cart.currency()), None)
        } else {
            (
                policy.shipping_for(subtotal),
                policy.remaining_for_free(subtotal),
            )
        };
        let grand_total = subtotal
            .try_add(&shipping)
            .ok_or(CommerceError::Overflow)?;

        Ok(Self {
            subtotal,
            shipping,
            grand_total,
            remaining_for_free_shipping: remaining,
            item_count: cart.item_count(),
        })
    }

    /// Check if shipping is free.
    pub fn has_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    fn cart_with(cents: i64, quantity: i64) -> Cart {
        let mut cart = Cart::new();
        let product = Product::new("p", "Amouage", "Reflection Man", Money::eur(cents));
        cart.add(&product, quantity).unwrap();
        cart
    }

    #[test]
    fn test_below_threshold_pays_flat_rate() {
        let summary = CartSummary::compute(&cart_with(2800, 1), &ShippingPolicy::default()).unwrap();
        assert_eq!(summary.subtotal, Money::eur(2800));
        assert_eq!(summary.shipping, Money::eur(499));
        assert_eq!(summary.grand_total, Money::eur(3299));
        assert_eq!(summary.remaining_for_free_shipping, Some(Money::eur(2200)));
    }

    #[test]
    fn test_above_threshold_ships_free() {
        let summary = CartSummary::compute(&cart_with(2800, 2), &ShippingPolicy::default()).unwrap();
        assert!(summary.has_free_shipping());
        assert_eq!(summary.grand_total, Money::eur(5600));
        assert_eq!(summary.remaining_for_free_shipping, None);
    }

    #[test]
    fn test_exactly_at_threshold_still_pays() {
        let summary = CartSummary::compute(&cart_with(2500, 2), &ShippingPolicy::default()).unwrap();
        assert_eq!(summary.shipping, Money::eur(499));
        assert_eq!(summary.remaining_for_free_shipping, None);
    }

    #[test]
    fn test_empty_cart_has_no_shipping() {
        let summary = CartSummary::compute(&Cart::new(), &ShippingPolicy::default()).unwrap();
        assert_eq!(summary.grand_total, Money::eur(0));
        assert_eq!(summary.item_count, 0);
    }

    #[test]
    fn test_policy_currency_must_match() {
        let policy = ShippingPolicy::new(
            Money::new(5000, Currency::USD),
            Money::new(499, Currency::USD),
        );
        assert!(CartSummary::compute(&Cart::new(), &policy).is_err());
    }
}
