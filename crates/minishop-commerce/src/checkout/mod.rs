//! Checkout module.
//!
//! Contains the order snapshot and the ledger that numbers and records it.

mod ledger;
mod order;

pub use ledger::OrderLedger;
pub use order::Order;
