//! Account types.

use serde::Serialize;
use std::fmt;

/// An opaque password, compared verbatim.
///
/// Never serialized and redacted from `Debug` so it cannot leak into logs.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    /// Exact, byte-for-byte comparison.
    pub fn matches(&self, candidate: &str) -> bool {
        self.0 == candidate
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(****)")
    }
}

impl From<&str> for Credential {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Credential {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A registered username/password pair.
///
/// Created by registration and never changed afterwards.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Account {
    username: String,
    #[serde(skip)]
    password: Credential,
}

impl Account {
    /// Create an account.
    pub fn new(username: impl Into<String>, password: impl Into<Credential>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Check both fields for an exact match.
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password.matches(password)
    }
}
