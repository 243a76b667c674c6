//! The account directory.

use crate::{Account, AuthError, Credential};
use tracing::{info, warn};

/// Registered accounts, in registration order.
///
/// Registration performs no uniqueness check: registering the same
/// username twice stores two accounts, and `login` accepts either password.
#[derive(Debug, Clone, Default)]
pub struct AccountDirectory {
    accounts: Vec<Account>,
}

impl AccountDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a new account. Always succeeds.
    pub fn register(
        &mut self,
        username: impl Into<String>,
        password: impl Into<Credential>,
    ) -> &Account {
        let account = Account::new(username, password);
        info!(username = account.username(), "account registered");
        let index = self.accounts.len();
        self.accounts.push(account);
        &self.accounts[index]
    }

    /// Find an account matching both fields exactly.
    ///
    /// Purely informational: no session or token is produced and repeated
    /// failures have no effect.
    pub fn login(&self, username: &str, password: &str) -> Result<&Account, AuthError> {
        match self.accounts.iter().find(|a| a.matches(username, password)) {
            Some(account) => {
                info!(username, "login succeeded");
                Ok(account)
            }
            None => {
                warn!(username, "login failed");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    /// All accounts in registration order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
