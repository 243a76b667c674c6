//! The read-only item catalog.

use std::collections::HashSet;
use std::sync::Arc;

use crate::catalog::Item;
use crate::error::CommerceError;
use crate::ids::ItemId;
use crate::money::{Currency, Money};
use serde::Serialize;
use tracing::debug;

/// A fixed collection of items, in storage order.
///
/// Items are handed out as `Arc<Item>` so carts and orders can hold them
/// without copying. Nothing mutates the catalog after construction, so it
/// can be shared freely.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Catalog {
    items: Vec<Arc<Item>>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and negative prices.
    pub fn new(items: impl IntoIterator<Item = Item>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::new();
        let mut stored = Vec::new();
        for item in items {
            if !seen.insert(item.id) {
                return Err(CommerceError::DuplicateItem(item.id));
            }
            if item.price.is_negative() {
                return Err(CommerceError::NegativePrice(item.id));
            }
            stored.push(Arc::new(item));
        }
        debug!(items = stored.len(), "catalog loaded");
        Ok(Self { items: stored })
    }

    /// The three stock items: "Product 1".."Product 3" at 10, 20 and 30.
    pub fn seeded(currency: Currency) -> Self {
        let items = (1..=3u64)
            .map(|n| {
                Arc::new(Item::new(
                    n,
                    format!("Product {n}"),
                    Money::from_major(n as i64 * 10, currency),
                ))
            })
            .collect();
        Self { items }
    }

    /// Look up an item by id.
    pub fn get_by_id(&self, id: ItemId) -> Result<Arc<Item>, CommerceError> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(CommerceError::ItemNotFound(id))
    }

    /// Every item whose name contains `query`, in storage order.
    ///
    /// Matching is case-sensitive; an empty query matches everything.
    pub fn search_by_name(&self, query: &str) -> Vec<Arc<Item>> {
        let hits: Vec<_> = self
            .items
            .iter()
            .filter(|item| item.name_contains(query))
            .cloned()
            .collect();
        debug!(query, hits = hits.len(), "catalog search");
        hits
    }

    /// All items in storage order.
    pub fn items(&self) -> &[Arc<Item>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
