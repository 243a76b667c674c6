//! Account module for minishop.
//!
//! Provides account registration and credential checks. Passwords are
//! stored and compared as given; hashing is left to a future layer.

mod account;
mod directory;
mod error;

pub use account::{Account, Credential};
pub use directory::AccountDirectory;
pub use error::AuthError;
