//! Session-keyed cart storage.

use std::collections::HashMap;
use std::sync::Arc;

use crate::cart::{Cart, LineItem};
use crate::catalog::Catalog;
use crate::error::CommerceError;
use crate::ids::{ItemId, SessionId};
use tracing::debug;

/// Carts keyed by session, backed by one shared catalog.
///
/// A session's cart is created on its first successful add; failed adds
/// never create one.
#[derive(Debug, Clone)]
pub struct CartStore {
    catalog: Arc<Catalog>,
    carts: HashMap<SessionId, Cart>,
}

impl CartStore {
    /// Create an empty store over `catalog`.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            carts: HashMap::new(),
        }
    }

    /// The catalog item lookups go through.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Add `quantity` of `item_id` to the session's cart as a new line.
    pub fn add(
        &mut self,
        session: &SessionId,
        item_id: ItemId,
        quantity: u32,
    ) -> Result<&LineItem, CommerceError> {
        let item = self.catalog.get_by_id(item_id)?;
        let line = LineItem::new(item, quantity)?;
        let cart = self.carts.entry(session.clone()).or_insert_with(|| {
            debug!(%session, "cart opened");
            Cart::new(session.clone())
        });
        Ok(cart.push(line))
    }

    /// Remove the first line for `item_id` from the session's cart.
    pub fn remove(&mut self, session: &SessionId, item_id: ItemId) -> Result<LineItem, CommerceError> {
        self.carts
            .get_mut(session)
            .ok_or(CommerceError::ItemNotInCart(item_id))?
            .remove(item_id)
    }

    /// The session's lines in insertion order; empty for an unknown session.
    pub fn view(&self, session: &SessionId) -> &[LineItem] {
        self.carts.get(session).map(Cart::view).unwrap_or(&[])
    }

    /// The session's cart, if one has been opened.
    pub fn cart(&self, session: &SessionId) -> Option<&Cart> {
        self.carts.get(session)
    }

    /// Drop the session's cart, returning it.
    pub fn close(&mut self, session: &SessionId) -> Option<Cart> {
        self.carts.remove(session)
    }

    /// Sessions with an open cart.
    pub fn sessions(&self) -> impl Iterator<Item = &SessionId> {
        self.carts.keys()
    }
}
