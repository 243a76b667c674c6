//! # minishop SDK
//!
//! A small in-memory shop: register an account, log in, fill a cart from
//! the catalog and turn it into a numbered order.
//!
//! ## Quick Start
//!
//! ```rust
//! use minishop_sdk::prelude::*;
//!
//! let mut shop = Storefront::seeded();
//! let session = SessionId::new("checkout-1");
//!
//! println!("{}", Notice::registered(shop.register("JohnDoe", "password")));
//! println!("{}", Notice::login(&shop.login("JohnDoe", "password")));
//!
//! println!("{}", Notice::added(&shop.add_to_cart(&session, ItemId::new(2), 3)));
//! println!("{}", Notice::cart(shop.view_cart(&session)));
//!
//! let order = shop.create_order_from_cart(&session, "Credit Card");
//! println!("{}", Notice::order_placed(&shop.place_order(order)));
//! ```
//!
//! ## Architecture
//!
//! - [`minishop_commerce`] holds the catalog, carts and order ledger
//! - [`minishop_auth`] holds the account directory
//! - [`Storefront`] owns one of each; [`report`] formats outcomes

pub mod prelude;
pub mod report;
mod storefront;

// Re-export domain crates
pub use minishop_auth;
pub use minishop_commerce;

pub use report::Notice;
pub use storefront::Storefront;
