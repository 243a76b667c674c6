//! Cart and line item types.

use std::sync::Arc;

use crate::catalog::{Catalog, Item};
use crate::error::CommerceError;
use crate::ids::{ItemId, SessionId};
use crate::money::{Currency, Money};
use serde::Serialize;
use tracing::debug;

/// An item paired with a requested quantity.
///
/// Only built through [`LineItem::new`], so the quantity is always at
/// least 1.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LineItem {
    item: Arc<Item>,
    quantity: u32,
}

impl LineItem {
    /// Create a line, rejecting a zero quantity.
    pub fn new(item: Arc<Item>, quantity: u32) -> Result<Self, CommerceError> {
        if quantity == 0 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }
        Ok(Self { item, quantity })
    }

    /// Shared, read-only catalog entry.
    pub fn item(&self) -> &Arc<Item> {
        &self.item
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Id of the underlying item.
    pub fn item_id(&self) -> ItemId {
        self.item.id
    }

    /// Unit price times quantity.
    pub fn total(&self) -> Result<Money, CommerceError> {
        self.item
            .price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}

/// Sum of line totals in `currency`.
pub(crate) fn lines_subtotal(
    lines: &[LineItem],
    currency: Currency,
) -> Result<Money, CommerceError> {
    let totals = lines
        .iter()
        .map(LineItem::total)
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(other) = totals.iter().find(|m| m.currency != currency) {
        return Err(CommerceError::CurrencyMismatch {
            expected: currency.code().to_string(),
            got: other.currency.code().to_string(),
        });
    }

    Money::try_sum(totals.iter(), currency).ok_or(CommerceError::Overflow)
}

/// The in-progress selections of one purchasing flow.
///
/// Lines keep insertion order. Adding an item that is already present
/// appends a second line instead of merging quantities, and removal takes
/// out only the first matching line.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Cart {
    /// Session owning this cart.
    pub session_id: SessionId,
    lines: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart for a session.
    pub fn new(session_id: impl Into<SessionId>) -> Self {
        Self {
            session_id: session_id.into(),
            lines: Vec::new(),
        }
    }

    /// Look up `item_id` in the catalog and append a new line for it.
    ///
    /// Returns `ItemNotFound` (leaving the cart untouched) when the catalog
    /// has no such item, `InvalidQuantity` for a zero quantity.
    pub fn add(
        &mut self,
        catalog: &Catalog,
        item_id: ItemId,
        quantity: u32,
    ) -> Result<&LineItem, CommerceError> {
        let item = catalog.get_by_id(item_id)?;
        let line = LineItem::new(item, quantity)?;
        Ok(self.push(line))
    }

    /// Append an already-built line.
    pub(crate) fn push(&mut self, line: LineItem) -> &LineItem {
        debug!(
            session = %self.session_id,
            item_id = %line.item_id(),
            quantity = line.quantity,
            "line added to cart"
        );
        let index = self.lines.len();
        self.lines.push(line);
        &self.lines[index]
    }

    /// Remove the first line for `item_id` and return it.
    pub fn remove(&mut self, item_id: ItemId) -> Result<LineItem, CommerceError> {
        let index = self
            .lines
            .iter()
            .position(|line| line.item_id() == item_id)
            .ok_or(CommerceError::ItemNotInCart(item_id))?;
        let removed = self.lines.remove(index);
        debug!(session = %self.session_id, %item_id, "line removed from cart");
        Ok(removed)
    }

    /// Current lines in insertion order.
    pub fn view(&self) -> &[LineItem] {
        &self.lines
    }

    /// Sum of quantities across lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Number of lines (duplicates counted separately).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum of line totals in `currency`.
    pub fn subtotal(&self, currency: Currency) -> Result<Money, CommerceError> {
        lines_subtotal(&self.lines, currency)
    }
}
