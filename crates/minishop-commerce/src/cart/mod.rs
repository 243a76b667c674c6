//! Shopping cart module.
//!
//! Contains line items, the per-session cart and the session-keyed store.

mod cart;
mod store;

pub(crate) use cart::lines_subtotal;
pub use cart::{Cart, LineItem};
pub use store::CartStore;
