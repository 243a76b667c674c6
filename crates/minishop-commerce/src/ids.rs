//! Newtype IDs for type-safe identifiers.
//!
//! Catalog items and orders are keyed by integers, cart sessions by an
//! opaque string. Newtypes keep an `ItemId` from being passed where an
//! `OrderId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate integer-backed newtype ID structs.
macro_rules! define_numeric_id {
    ($name:ident) => {
        /// A numeric identifier.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw integer.
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Get the raw integer.
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_numeric_id!(ItemId);
define_numeric_id!(OrderId);

impl OrderId {
    /// The first id a fresh ledger hands out.
    pub const FIRST: OrderId = OrderId(1);

    /// The id that follows this one.
    pub(crate) fn successor(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Identifies one purchasing flow (and therefore one cart).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// Create a session ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new unique session ID.
    pub fn generate() -> Self {
        Self(generate_session_token())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Timestamp plus a process-wide counter; unique within one process.
fn generate_session_token() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    let counter = COUNTER.fetch_add(1, Ordering::SeqCst);

    format!("sess_{:x}_{:x}", timestamp, counter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_id_roundtrip() {
        let id = ItemId::new(42);
        assert_eq!(id.get(), 42);
        assert_eq!(u64::from(id), 42);
        assert_eq!(ItemId::from(42), id);
    }

    #[test]
    fn test_numeric_id_display() {
        assert_eq!(format!("{}", OrderId::new(7)), "7");
    }

    #[test]
    fn test_order_id_successor() {
        assert_eq!(OrderId::FIRST.successor(), OrderId::new(2));
        assert!(OrderId::FIRST < OrderId::FIRST.successor());
    }

    #[test]
    fn test_session_generation() {
        let a = SessionId::generate();
        let b = SessionId::generate();
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("sess_"));
    }

    #[test]
    fn test_session_from_str() {
        let id: SessionId = "checkout-1".into();
        assert_eq!(id.as_str(), "checkout-1");
        assert_eq!(id.to_string(), "checkout-1");
    }
}
