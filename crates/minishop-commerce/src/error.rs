//! Commerce error types.

use crate::ids::{ItemId, OrderId};
use thiserror::Error;

/// Errors that can occur in catalog, cart and ledger operations.
///
/// None of these are fatal; each one leaves the component unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Item id absent from the catalog.
    #[error("Product with ID {0} not found")]
    ItemNotFound(ItemId),

    /// Item id absent from the cart on removal.
    #[error("Product with ID {0} not found in the cart")]
    ItemNotInCart(ItemId),

    /// Order id absent from the ledger.
    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    /// Order already recorded in the ledger.
    #[error("Order {0} has already been placed")]
    DuplicateOrder(OrderId),

    /// Order id never issued by this ledger.
    #[error("Order {0} was not created by this ledger")]
    ForeignOrder(OrderId),

    /// Two catalog entries share an id.
    #[error("Duplicate item id in catalog: {0}")]
    DuplicateItem(ItemId),

    /// Catalog entry with a negative price.
    #[error("Item {0} has a negative price")]
    NegativePrice(ItemId),

    /// Line item quantity of zero.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}

impl CommerceError {
    /// Check if this is a lookup miss rather than bad input.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CommerceError::ItemNotFound(_)
                | CommerceError::ItemNotInCart(_)
                | CommerceError::OrderNotFound(_)
        )
    }
}
