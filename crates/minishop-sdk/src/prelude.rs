//! Prelude module for convenient imports.
//!
//! ```rust
//! use minishop_sdk::prelude::*;
//! ```

pub use crate::report::{CartLine, Notice, SearchHit};
pub use crate::storefront::Storefront;

pub use minishop_auth::{Account, AccountDirectory, AuthError, Credential};
pub use minishop_commerce::prelude::*;
