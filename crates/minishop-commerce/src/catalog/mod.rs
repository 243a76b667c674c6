//! Product catalog module.
//!
//! Contains the item type and the read-only catalog.

mod catalog;
mod item;

pub use catalog::Catalog;
pub use item::Item;
