//! The order ledger.

use chrono::Utc;

use crate::cart::LineItem;
use crate::checkout::Order;
use crate::error::CommerceError;
use crate::ids::OrderId;
use tracing::{debug, info, warn};

/// Placed orders plus the id sequence.
///
/// Ids start at 1 and increase by one for every created order, whether or
/// not it is later placed; an id is never handed out twice.
#[derive(Debug, Clone)]
pub struct OrderLedger {
    next_id: OrderId,
    orders: Vec<Order>,
}

impl Default for OrderLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            next_id: OrderId::FIRST,
            orders: Vec::new(),
        }
    }

    /// Snapshot `line_items` into a new order with the next id.
    ///
    /// The order is not visible until passed to [`place_order`](Self::place_order).
    pub fn create_order(
        &mut self,
        line_items: &[LineItem],
        payment_method: impl Into<String>,
    ) -> Order {
        let id = self.next_id;
        self.next_id = id.successor();
        let order = Order::new(id, line_items.to_vec(), payment_method.into(), Utc::now());
        debug!(order_id = %id, lines = line_items.len(), "order created");
        order
    }

    /// Record an order created by this ledger.
    ///
    /// Each id is recorded at most once: placing the same order twice
    /// yields `DuplicateOrder`, and an id this ledger never issued yields
    /// `ForeignOrder`. Payment method and contents are not checked.
    pub fn place_order(&mut self, order: Order) -> Result<&Order, CommerceError> {
        let id = order.id();
        if id >= self.next_id {
            warn!(order_id = %id, "order from another ledger rejected");
            return Err(CommerceError::ForeignOrder(id));
        }
        if self.orders.iter().any(|placed| placed.id() == id) {
            warn!(order_id = %id, "order placed twice");
            return Err(CommerceError::DuplicateOrder(id));
        }
        info!(
            order_id = %order.id(),
            items = order.item_count(),
            payment_method = order.payment_method(),
            "order placed"
        );
        let index = self.orders.len();
        self.orders.push(order);
        Ok(&self.orders[index])
    }

    /// Look up a placed order.
    pub fn get(&self, id: OrderId) -> Result<&Order, CommerceError> {
        self.orders
            .iter()
            .find(|order| order.id() == id)
            .ok_or(CommerceError::OrderNotFound(id))
    }

    /// Placed orders in placement order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// The id the next created order will get.
    pub fn next_id(&self) -> OrderId {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
