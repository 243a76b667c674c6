//! Commerce domain types and logic for minishop.
//!
//! This crate provides the in-memory building blocks of a small shop:
//!
//! - **Catalog**: a fixed, read-only list of items with id lookup and name search
//! - **Cart**: line items per session, in insertion order
//! - **Checkout**: order snapshots and the ledger that numbers them
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use minishop_commerce::prelude::*;
//!
//! let catalog = Arc::new(Catalog::seeded(Currency::USD));
//! let mut carts = CartStore::new(catalog);
//! let session = SessionId::new("checkout-1");
//!
//! carts.add(&session, ItemId::new(2), 3).unwrap();
//!
//! let mut ledger = OrderLedger::new();
//! let order = ledger.create_order(carts.view(&session), "Credit Card");
//! let placed = ledger.place_order(order).unwrap();
//! assert_eq!(placed.id(), OrderId::new(1));
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Item};

    // Cart
    pub use crate::cart::{Cart, CartStore, LineItem};

    // Checkout
    pub use crate::checkout::{Order, OrderLedger};
}
