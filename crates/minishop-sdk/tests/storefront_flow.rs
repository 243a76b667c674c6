//! End-to-end behavior of a storefront: accounts, catalog, cart, orders.

use minishop_sdk::prelude::*;

fn cart_pairs(shop: &Storefront, session: &SessionId) -> Vec<(u64, u32)> {
    shop.view_cart(session)
        .iter()
        .map(|l| (l.item_id().get(), l.quantity()))
        .collect()
}

#[test]
fn registered_account_can_log_in() {
    let mut shop = Storefront::seeded();
    shop.register("JohnDoe", "password");

    assert!(shop.login("JohnDoe", "password").is_ok());
    assert_eq!(
        shop.login("JohnDoe", "wrong-password").unwrap_err(),
        AuthError::InvalidCredentials
    );
}

#[test]
fn catalog_lookup_by_id() {
    let shop = Storefront::seeded();
    for id in [1u64, 2, 3] {
        assert_eq!(shop.get_item(ItemId::new(id)).unwrap().id, ItemId::new(id));
    }
    let err = shop.get_item(ItemId::new(999)).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn search_returns_all_products_in_order() {
    let shop = Storefront::seeded();
    let names: Vec<String> = shop
        .search("Product")
        .iter()
        .map(|item| item.name.clone())
        .collect();
    assert_eq!(names, vec!["Product 1", "Product 2", "Product 3"]);
}

#[test]
fn cart_add_and_remove_sequence() {
    let mut shop = Storefront::seeded();
    let session = SessionId::new("session-1");

    shop.add_to_cart(&session, ItemId::new(2), 3).unwrap();
    shop.add_to_cart(&session, ItemId::new(1), 1).unwrap();
    assert_eq!(cart_pairs(&shop, &session), vec![(2, 3), (1, 1)]);

    shop.remove_from_cart(&session, ItemId::new(1)).unwrap();
    assert_eq!(cart_pairs(&shop, &session), vec![(2, 3)]);

    let err = shop.remove_from_cart(&session, ItemId::new(1)).unwrap_err();
    assert_eq!(err, CommerceError::ItemNotInCart(ItemId::new(1)));
    assert_eq!(cart_pairs(&shop, &session), vec![(2, 3)]);
}

// Duplicate adds stay as separate lines; removal takes the first one.
#[test]
fn duplicate_adds_are_not_merged() {
    let mut shop = Storefront::seeded();
    let session = SessionId::new("session-1");
    shop.add_to_cart(&session, ItemId::new(3), 1).unwrap();
    shop.add_to_cart(&session, ItemId::new(3), 1).unwrap();

    assert_eq!(cart_pairs(&shop, &session), vec![(3, 1), (3, 1)]);
    shop.remove_from_cart(&session, ItemId::new(3)).unwrap();
    assert_eq!(cart_pairs(&shop, &session), vec![(3, 1)]);
}

#[test]
fn orders_get_increasing_ids_and_keep_their_lines() {
    let mut shop = Storefront::seeded();
    let item3 = shop.get_item(ItemId::new(3)).unwrap();
    let item1 = shop.get_item(ItemId::new(1)).unwrap();
    let first_lines = vec![LineItem::new(item3, 2).unwrap()];
    let second_lines = vec![LineItem::new(item1, 5).unwrap()];

    let first = shop.create_order(&first_lines, "Credit Card");
    let first_id = shop.place_order(first).unwrap().id();
    let second = shop.create_order(&second_lines, "Credit Card");
    let second_id = shop.place_order(second).unwrap().id();

    assert_eq!(first_id, OrderId::new(1));
    assert_eq!(second_id, OrderId::new(2));

    let ledger = shop.ledger();
    assert_eq!(ledger.get(first_id).unwrap().line_items(), first_lines.as_slice());
    assert_eq!(ledger.get(second_id).unwrap().line_items(), second_lines.as_slice());
}

#[test]
fn walkthrough_status_lines() {
    let mut shop = Storefront::seeded();
    let session = SessionId::new("demo");
    let mut out: Vec<String> = Vec::new();

    out.extend(Notice::registered(shop.register("JohnDoe", "password")).lines());
    out.extend(Notice::login(&shop.login("JohnDoe", "password")).lines());
    out.extend(Notice::added(&shop.add_to_cart(&session, ItemId::new(2), 3)).lines());
    out.extend(Notice::added(&shop.add_to_cart(&session, ItemId::new(1), 1)).lines());
    out.extend(Notice::cart(shop.view_cart(&session)).lines());
    out.extend(Notice::removed(&shop.remove_from_cart(&session, ItemId::new(1))).lines());
    out.extend(Notice::cart(shop.view_cart(&session)).lines());

    let item3 = shop.get_item(ItemId::new(3)).unwrap();
    let lines = vec![LineItem::new(item3, 2).unwrap()];
    let order = shop.create_order(&lines, "Credit Card");
    out.extend(Notice::order_placed(&shop.place_order(order)).lines());

    assert_eq!(
        out,
        vec![
            "User JohnDoe registered successfully!",
            "User JohnDoe logged in successfully!",
            "Added 3x Product 2 to the cart.",
            "Added 1x Product 1 to the cart.",
            "Shopping Cart:",
            "Product 2 - Quantity: 3",
            "Product 1 - Quantity: 1",
            "Removed Product 1 from the cart.",
            "Shopping Cart:",
            "Product 2 - Quantity: 3",
            "Order 1 placed successfully!",
        ]
    );
}
