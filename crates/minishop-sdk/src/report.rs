//! Human-readable status lines for storefront outcomes.
//!
//! Each operation on [`Storefront`](crate::Storefront) returns a typed
//! result; [`Notice`] turns those results into the status lines a
//! terminal or log shows, or into JSON via `serde`.

use std::fmt;
use std::sync::Arc;

use minishop_auth::{Account, AuthError};
use minishop_commerce::cart::LineItem;
use minishop_commerce::catalog::Item;
use minishop_commerce::checkout::Order;
use minishop_commerce::{CommerceError, ItemId, Money, OrderId};
use serde::Serialize;

/// One line of a cart listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub name: String,
    pub quantity: u32,
}

/// One search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub id: ItemId,
    pub name: String,
    pub price: Money,
}

/// The reportable outcome of a storefront operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Notice {
    Registered { username: String },
    LoggedIn { username: String },
    LoginFailed,
    AddedToCart { name: String, quantity: u32 },
    ProductNotFound { id: ItemId },
    RemovedFromCart { name: String },
    NotInCart { id: ItemId },
    CartContents { lines: Vec<CartLine> },
    OrderPlaced { id: OrderId },
    SearchResults { query: String, hits: Vec<SearchHit> },
    Rejected { reason: String },
}

impl Notice {
    pub fn registered(account: &Account) -> Self {
        Notice::Registered {
            username: account.username().to_string(),
        }
    }

    pub fn login(result: &Result<&Account, AuthError>) -> Self {
        match result {
            Ok(account) => Notice::LoggedIn {
                username: account.username().to_string(),
            },
            Err(AuthError::InvalidCredentials) => Notice::LoginFailed,
        }
    }

    pub fn added(result: &Result<&LineItem, CommerceError>) -> Self {
        match result {
            Ok(line) => Notice::AddedToCart {
                name: line.item().name.clone(),
                quantity: line.quantity(),
            },
            Err(err) => Self::from_error(err),
        }
    }

    pub fn removed(result: &Result<LineItem, CommerceError>) -> Self {
        match result {
            Ok(line) => Notice::RemovedFromCart {
                name: line.item().name.clone(),
            },
            Err(err) => Self::from_error(err),
        }
    }

    pub fn cart(lines: &[LineItem]) -> Self {
        Notice::CartContents {
            lines: lines
                .iter()
                .map(|l| CartLine {
                    name: l.item().name.clone(),
                    quantity: l.quantity(),
                })
                .collect(),
        }
    }

    pub fn order_placed(result: &Result<&Order, CommerceError>) -> Self {
        match result {
            Ok(order) => Notice::OrderPlaced { id: order.id() },
            Err(err) => Self::from_error(err),
        }
    }

    pub fn search(query: &str, items: &[Arc<Item>]) -> Self {
        Notice::SearchResults {
            query: query.to_string(),
            hits: items
                .iter()
                .map(|item| SearchHit {
                    id: item.id,
                    name: item.name.clone(),
                    price: item.price,
                })
                .collect(),
        }
    }

    fn from_error(err: &CommerceError) -> Self {
        match err {
            CommerceError::ItemNotFound(id) => Notice::ProductNotFound { id: *id },
            CommerceError::ItemNotInCart(id) => Notice::NotInCart { id: *id },
            other => Notice::Rejected {
                reason: other.to_string(),
            },
        }
    }

    /// Check if this reports a negative outcome.
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Notice::LoginFailed
                | Notice::ProductNotFound { .. }
                | Notice::NotInCart { .. }
                | Notice::Rejected { .. }
        )
    }

    /// The notice as individual status lines.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Notice::Registered { username } => {
                vec![format!("User {username} registered successfully!")]
            }
            Notice::LoggedIn { username } => {
                vec![format!("User {username} logged in successfully!")]
            }
            Notice::LoginFailed => vec!["Invalid credentials. Please try again.".to_string()],
            Notice::AddedToCart { name, quantity } => {
                vec![format!("Added {quantity}x {name} to the cart.")]
            }
            Notice::ProductNotFound { id } => vec![format!("Product with ID {id} not found.")],
            Notice::RemovedFromCart { name } => vec![format!("Removed {name} from the cart.")],
            Notice::NotInCart { id } => {
                vec![format!("Product with ID {id} not found in the cart.")]
            }
            Notice::CartContents { lines } => std::iter::once("Shopping Cart:".to_string())
                .chain(
                    lines
                        .iter()
                        .map(|l| format!("{} - Quantity: {}", l.name, l.quantity)),
                )
                .collect(),
            Notice::OrderPlaced { id } => vec![format!("Order {id} placed successfully!")],
            Notice::SearchResults { hits, .. } => hits
                .iter()
                .map(|h| format!("#{} {} {}", h.id, h.name, h.price))
                .collect(),
            Notice::Rejected { reason } => vec![format!("{reason}.")],
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Storefront;
    use minishop_commerce::SessionId;

    #[test]
    fn test_login_lines() {
        let mut shop = Storefront::seeded();
        let registered = Notice::registered(shop.register("JohnDoe", "password"));
        assert_eq!(registered.to_string(), "User JohnDoe registered successfully!");

        let ok = Notice::login(&shop.login("JohnDoe", "password"));
        assert_eq!(ok.to_string(), "User JohnDoe logged in successfully!");

        let bad = Notice::login(&shop.login("JohnDoe", "nope"));
        assert_eq!(bad.to_string(), "Invalid credentials. Please try again.");
        assert!(bad.is_failure());
    }

    #[test]
    fn test_cart_lines() {
        let mut shop = Storefront::seeded();
        let s = SessionId::new("s");

        let added = Notice::added(&shop.add_to_cart(&s, ItemId::new(2), 3));
        assert_eq!(added.to_string(), "Added 3x Product 2 to the cart.");

        let missing = Notice::added(&shop.add_to_cart(&s, ItemId::new(999), 1));
        assert_eq!(missing.to_string(), "Product with ID 999 not found.");

        let removed = Notice::removed(&shop.remove_from_cart(&s, ItemId::new(2)));
        assert_eq!(removed.to_string(), "Removed Product 2 from the cart.");

        let absent = Notice::removed(&shop.remove_from_cart(&s, ItemId::new(2)));
        assert_eq!(absent.to_string(), "Product with ID 2 not found in the cart.");
    }

    #[test]
    fn test_cart_listing() {
        let mut shop = Storefront::seeded();
        let s = SessionId::new("s");
        shop.add_to_cart(&s, ItemId::new(2), 3).unwrap();
        shop.add_to_cart(&s, ItemId::new(1), 1).unwrap();

        assert_eq!(
            Notice::cart(shop.view_cart(&s)).lines(),
            vec![
                "Shopping Cart:",
                "Product 2 - Quantity: 3",
                "Product 1 - Quantity: 1",
            ]
        );
    }

    #[test]
    fn test_zero_quantity_is_rejected_notice() {
        let mut shop = Storefront::seeded();
        let s = SessionId::new("s");
        let notice = Notice::added(&shop.add_to_cart(&s, ItemId::new(1), 0));
        assert_eq!(notice.to_string(), "Invalid quantity: 0.");
        assert!(notice.is_failure());
    }

    #[test]
    fn test_search_lines() {
        let shop = Storefront::seeded();
        let notice = Notice::search("2", &shop.search("2"));
        assert_eq!(notice.lines(), vec!["#2 Product 2 $20.00"]);
    }

    #[test]
    fn test_order_lines() {
        let mut shop = Storefront::seeded();
        let s = SessionId::new("s");
        shop.add_to_cart(&s, ItemId::new(3), 2).unwrap();
        let order = shop.create_order_from_cart(&s, "Credit Card");
        let copy = order.clone();

        let placed = Notice::order_placed(&shop.place_order(order));
        assert_eq!(placed.to_string(), "Order 1 placed successfully!");

        let again = Notice::order_placed(&shop.place_order(copy));
        assert_eq!(again.to_string(), "Order 1 has already been placed.");
        assert!(again.is_failure());
    }

    #[test]
    fn test_notice_json_tag() {
        let json = serde_json::to_value(Notice::OrderPlaced { id: OrderId::new(1) }).unwrap();
        assert_eq!(json["event"], "order_placed");
        assert_eq!(json["id"], 1);
    }
}
