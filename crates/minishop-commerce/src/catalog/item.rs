//! Catalog item type.

use crate::ids::ItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A purchasable catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Unique, stable identifier.
    pub id: ItemId,
    /// Display name; the target of name search.
    pub name: String,
    /// Unit price.
    pub price: Money,
}

impl Item {
    /// Create a new item.
    pub fn new(id: u64, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: ItemId::new(id),
            name: name.into(),
            price,
        }
    }

    /// Check if the name contains `query` (case-sensitive).
    pub fn name_contains(&self, query: &str) -> bool {
        self.name.contains(query)
    }
}
