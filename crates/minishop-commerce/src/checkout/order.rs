//! Order types.

use chrono::{DateTime, Utc};

use crate::cart::{lines_subtotal, LineItem};
use crate::error::CommerceError;
use crate::ids::OrderId;
use crate::money::{Currency, Money};
use serde::Serialize;

/// An immutable snapshot of line items plus how they were paid for.
///
/// Orders are only built by [`OrderLedger::create_order`](crate::checkout::OrderLedger::create_order);
/// fields are read through accessors so a snapshot cannot drift after the
/// fact.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Order {
    id: OrderId,
    line_items: Vec<LineItem>,
    payment_method: String,
    placed_at: DateTime<Utc>,
}

impl Order {
    pub(crate) fn new(
        id: OrderId,
        line_items: Vec<LineItem>,
        payment_method: String,
        placed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            line_items,
            payment_method,
            placed_at,
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    /// Lines as they were when the order was created.
    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    pub fn payment_method(&self) -> &str {
        &self.payment_method
    }

    /// Creation time.
    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    /// Sum of quantities.
    pub fn item_count(&self) -> u64 {
        self.line_items.iter().map(|l| u64::from(l.quantity())).sum()
    }

    /// Sum of line totals in `currency`.
    pub fn subtotal(&self, currency: Currency) -> Result<Money, CommerceError> {
        lines_subtotal(&self.line_items, currency)
    }
}
