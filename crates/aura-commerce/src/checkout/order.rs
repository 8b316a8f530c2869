//! Order types.

use crate::cart::{Cart, CartItem, CartSummary, ShippingPolicy};
use crate::checkout::{Address, PaymentMethod};
use crate::clock::now_secs;
use crate::error::CommerceError;
use crate::ids::{OrderId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Order placed, awaiting payment.
    #[default]
    Pending,
    /// Payment accepted.
    Confirmed,
    /// Order being prepared.
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Refunded,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Refunded => "refunded",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Refunded => "Refunded",
        }
    }

    /// Check if order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Delivered | OrderStatus::Cancelled | OrderStatus::Refunded
        )
    }
}

/// What the customer filled in on the checkout screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutForm {
    pub shipping_address: Address,
    /// `None` bills to the shipping address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_address: Option<Address>,
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

impl CheckoutForm {
    pub fn new(shipping_address: Address) -> Self {
        Self {
            shipping_address,
            billing_address: None,
            payment_method: PaymentMethod::default(),
        }
    }

    pub fn with_billing_address(mut self, address: Address) -> Self {
        self.billing_address = Some(address);
        self
    }

    pub fn with_payment_method(mut self, method: PaymentMethod) -> Self {
        self.payment_method = method;
        self
    }

    /// The address the invoice goes to.
    pub fn effective_billing_address(&self) -> &Address {
        self.billing_address.as_ref().unwrap_or(&self.shipping_address)
    }

    /// Validate shipping, then billing.
    pub fn validate(&self) -> Result<(), CommerceError> {
        self.shipping_address.validate()?;
        if let Some(ref billing) = self.billing_address {
            billing.validate().map_err(|e| match e {
                CommerceError::CheckoutIncomplete(field) => {
                    CommerceError::CheckoutIncomplete(format!("billing {}", field))
                }
                other => other,
            })?;
        }
        Ok(())
    }
}

/// A line of a placed order, frozen at order time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineItem {
    pub product_id: ProductId,
    pub brand: String,
    pub name: String,
    pub quantity: i64,
    pub unit_price: Money,
    pub total_price: Money,
}

impl OrderLineItem {
    fn from_cart_item(item: &CartItem) -> Result<Self, CommerceError> {
        Ok(Self {
            product_id: item.product.id.clone(),
            brand: item.product.brand.clone(),
            name: item.product.name.clone(),
            quantity: item.quantity,
            unit_price: item.product.price,
            total_price: item.line_total().ok_or(CommerceError::Overflow)?,
        })
    }
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order number, `AO-<unix millis>`.
    pub id: OrderId,
    pub status: OrderStatus,
    pub line_items: Vec<OrderLineItem>,
    pub subtotal: Money,
    pub shipping_total: Money,
    pub grand_total: Money,
    pub payment_method: PaymentMethod,
    pub shipping_address: Address,
    pub billing_address: Address,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
    /// Carrier tracking number, once shipped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
}

impl Order {
    /// Place an order for everything in `cart`.
    ///
    /// Returns error if the cart is empty, an address is incomplete, or the
    /// cart cannot be priced under `policy`.
    pub fn place(
        cart: &Cart,
        form: &CheckoutForm,
        policy: &ShippingPolicy,
    ) -> Result<Self, CommerceError> {
        Self::place_with_id(cart, form, policy, OrderId::generate())
    }

    /// Like [`Order::place`] with a caller-chosen order number.
    pub fn place_with_id(
        cart: &Cart,
        form: &CheckoutForm,
        policy: &ShippingPolicy,
        id: OrderId,
    ) -> Result<Self, CommerceError> {
        if cart.is_empty() {
            return Err(CommerceError::EmptyCart);
        }
        form.validate()?;
        let summary = CartSummary::compute(cart, policy)?;
        let line_items = cart
            .items()
            .iter()
            .map(OrderLineItem::from_cart_item)
            .collect::<Result<Vec<_>, _>>()?;

        let now = now_secs();
        tracing::debug!(order = %id, total = %summary.grand_total.display(), "placed order");
        Ok(Self {
            id,
            status: OrderStatus::Confirmed,
            line_items,
            subtotal: summary.subtotal,
            shipping_total: summary.shipping,
            grand_total: summary.grand_total,
            payment_method: form.payment_method,
            shipping_address: form.shipping_address.clone(),
            billing_address: form.effective_billing_address().clone(),
            created_at: now,
            updated_at: now,
            tracking_number: None,
        })
    }

    /// Get total item count.
    pub fn item_count(&self) -> i64 {
        self.line_items.iter().map(|i| i.quantity).sum()
    }
}
