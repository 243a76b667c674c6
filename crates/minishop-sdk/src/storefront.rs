//! The storefront facade.

use std::sync::Arc;

use minishop_auth::{Account, AccountDirectory, AuthError, Credential};
use minishop_commerce::cart::{CartStore, LineItem};
use minishop_commerce::catalog::{Catalog, Item};
use minishop_commerce::checkout::{Order, OrderLedger};
use minishop_commerce::{CommerceError, Currency, ItemId, Money, SessionId};

/// One shop: accounts, catalog, carts and ledger, each owned explicitly.
///
/// Components are independent instances, so tests can build as many
/// storefronts as they like without shared state.
#[derive(Debug, Clone)]
pub struct Storefront {
    accounts: AccountDirectory,
    carts: CartStore,
    ledger: OrderLedger,
    currency: Currency,
}

impl Storefront {
    /// Create a storefront over `catalog`, pricing totals in `currency`.
    pub fn new(catalog: Catalog, currency: Currency) -> Self {
        Self {
            accounts: AccountDirectory::new(),
            carts: CartStore::new(Arc::new(catalog)),
            ledger: OrderLedger::new(),
            currency,
        }
    }

    /// A USD storefront over the three stock items.
    pub fn seeded() -> Self {
        Self::new(Catalog::seeded(Currency::USD), Currency::USD)
    }

    // Accounts

    pub fn register(
        &mut self,
        username: impl Into<String>,
        password: impl Into<Credential>,
    ) -> &Account {
        self.accounts.register(username, password)
    }

    pub fn login(&self, username: &str, password: &str) -> Result<&Account, AuthError> {
        self.accounts.login(username, password)
    }

    // Catalog

    pub fn catalog(&self) -> &Catalog {
        self.carts.catalog()
    }

    pub fn get_item(&self, id: ItemId) -> Result<Arc<Item>, CommerceError> {
        self.catalog().get_by_id(id)
    }

    pub fn search(&self, query: &str) -> Vec<Arc<Item>> {
        self.catalog().search_by_name(query)
    }

    // Cart

    pub fn add_to_cart(
        &mut self,
        session: &SessionId,
        item_id: ItemId,
        quantity: u32,
    ) -> Result<&LineItem, CommerceError> {
        self.carts.add(session, item_id, quantity)
    }

    pub fn remove_from_cart(
        &mut self,
        session: &SessionId,
        item_id: ItemId,
    ) -> Result<LineItem, CommerceError> {
        self.carts.remove(session, item_id)
    }

    pub fn view_cart(&self, session: &SessionId) -> &[LineItem] {
        self.carts.view(session)
    }

    pub fn cart_subtotal(&self, session: &SessionId) -> Result<Money, CommerceError> {
        match self.carts.cart(session) {
            Some(cart) => cart.subtotal(self.currency),
            None => Ok(Money::zero(self.currency)),
        }
    }

    // Orders

    /// Snapshot arbitrary lines into an unplaced order.
    pub fn create_order(&mut self, line_items: &[LineItem], payment_method: &str) -> Order {
        self.ledger.create_order(line_items, payment_method)
    }

    /// Snapshot the session's cart into an unplaced order.
    ///
    /// The cart itself is left as it is.
    pub fn create_order_from_cart(&mut self, session: &SessionId, payment_method: &str) -> Order {
        self.ledger
            .create_order(self.carts.view(session), payment_method)
    }

    /// Record an order; see [`OrderLedger::place_order`].
    pub fn place_order(&mut self, order: Order) -> Result<&Order, CommerceError> {
        self.ledger.place_order(order)
    }

    // Component access

    pub fn ledger(&self) -> &OrderLedger {
        &self.ledger
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_from_cart_leaves_cart() {
        let mut shop = Storefront::seeded();
        let session = SessionId::new("s1");
        shop.add_to_cart(&session, ItemId::new(2), 3).unwrap();

        let order = shop.create_order_from_cart(&session, "Credit Card");
        assert_eq!(order.item_count(), 3);
        assert_eq!(shop.view_cart(&session).len(), 1);
        assert!(shop.ledger().is_empty());

        shop.place_order(order).unwrap();
        assert_eq!(shop.ledger().len(), 1);
    }

    #[test]
    fn test_cart_subtotal() {
        let mut shop = Storefront::seeded();
        let session = SessionId::new("s1");
        assert!(shop.cart_subtotal(&session).unwrap().is_zero());

        shop.add_to_cart(&session, ItemId::new(2), 3).unwrap();
        shop.add_to_cart(&session, ItemId::new(1), 1).unwrap();
        assert_eq!(shop.cart_subtotal(&session).unwrap().display(), "$70.00");
    }

    #[test]
    fn test_independent_instances() {
        let mut a = Storefront::seeded();
        let b = Storefront::seeded();
        a.register("JohnDoe", "password");
        assert!(a.login("JohnDoe", "password").is_ok());
        assert!(b.login("JohnDoe", "password").is_err());
    }
}
