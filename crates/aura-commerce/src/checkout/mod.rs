//! Checkout module.
//!
//! Contains the delivery address, payment method choice and the order
//! placed from a cart.

mod address;
mod order;
mod payment;

pub use address::Address;
pub use order::{CheckoutForm, Order, OrderStatus};
pub use payment::PaymentMethod;
