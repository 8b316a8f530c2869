//! Shopping cart module.
//!
//! Contains the cart with its derived totals, shipping/summary pricing, and
//! the store that persists the cart to local storage.

mod cart;
mod pricing;
mod store;

pub use cart::{Cart, CartItem, MAX_QUANTITY_PER_ITEM};
pub use pricing::{CartSummary, ShippingPolicy};
pub use store::{CartStore, CART_STORAGE_KEY};
