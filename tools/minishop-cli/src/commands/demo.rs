//! Scripted walkthrough of a full purchase.

use anyhow::Result;
use minishop_sdk::prelude::*;
use tracing::debug;

use super::DemoArgs;
use crate::context::Context;

/// Run the demo command.
///
/// Registers and logs in, fills a cart, removes a line, places an order for
/// a separately built line list and finishes with a name search. Every step
/// prints its status line; `--verbose` adds the session, cart subtotal and
/// order details.
pub fn run(args: DemoArgs, ctx: &Context) -> Result<()> {
    let walkthrough = walkthrough(&args, ctx)?;
    let out = &ctx.output;

    for notice in &walkthrough.notices {
        out.notice(notice);
    }

    if out.is_verbose() {
        let shop = &walkthrough.shop;
        out.kv("session", &walkthrough.session);
        out.kv("cart subtotal", shop.cart_subtotal(&walkthrough.session)?);
        for order in shop.ledger().orders() {
            out.kv("order", order.id());
            out.kv("payment method", order.payment_method());
            out.kv("placed at", order.placed_at().to_rfc3339());
            out.kv("subtotal", order.subtotal(shop.currency())?);
        }
    }

    Ok(())
}

/// The storefront after the walkthrough plus one notice per step.
struct Walkthrough {
    shop: Storefront,
    session: SessionId,
    notices: Vec<Notice>,
}

fn walkthrough(args: &DemoArgs, ctx: &Context) -> Result<Walkthrough> {
    let mut shop = ctx.storefront()?;
    let session = ctx.session();
    let payment_method = args
        .payment_method
        .clone()
        .unwrap_or_else(|| ctx.config.store.payment_method.clone());
    let mut notices = Vec::new();

    debug!(%session, items = shop.catalog().len(), "demo starting");

    notices.push(Notice::registered(
        shop.register(args.username.clone(), args.password.as_str()),
    ));
    notices.push(Notice::login(&shop.login(&args.username, &args.password)));

    notices.push(Notice::added(&shop.add_to_cart(&session, ItemId::new(2), 3)));
    notices.push(Notice::added(&shop.add_to_cart(&session, ItemId::new(1), 1)));
    notices.push(Notice::cart(shop.view_cart(&session)));

    notices.push(Notice::removed(&shop.remove_from_cart(&session, ItemId::new(1))));
    notices.push(Notice::cart(shop.view_cart(&session)));

    // The order is built from its own line list, not from the cart above.
    let order_lines = match shop.get_item(ItemId::new(3)) {
        Ok(item) => vec![LineItem::new(item, 2)?],
        Err(err) => {
            ctx.output.warn(&format!("{err}; ordering nothing"));
            Vec::new()
        }
    };
    let order = shop.create_order(&order_lines, &payment_method);
    notices.push(Notice::order_placed(&shop.place_order(order)));

    notices.push(Notice::search(&args.search, &shop.search(&args.search)));

    Ok(Walkthrough {
        shop,
        session,
        notices,
    })
}
