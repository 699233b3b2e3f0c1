//! Domain identifier types
//!
//! Newtype wrappers for the identifiers the engine tracks across snapshots.
//! Each type ensures type safety so account identifiers and transaction
//! identity keys cannot be mixed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Account identifier newtype wrapper
///
/// Represents the account an envelope was captured for. Typically a UUID but
/// the engine treats it as an opaque non-blank string.
///
/// # Examples
///
/// ```
/// use ledgermask::domain::ids::AccountId;
///
/// let account_id = AccountId::new("7d44b88c-4199-4bad-97dc-d78268e01398").unwrap();
/// assert_eq!(account_id.as_str(), "7d44b88c-4199-4bad-97dc-d78268e01398");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountId(String);

impl AccountId {
    /// Creates a new AccountId from a string
    ///
    /// Returns `Err` if the identifier is blank, since both the identity
    /// model and the account-identifier substitution require it.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Account ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the account ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for AccountId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Transaction identity key newtype wrapper
///
/// A deterministic fingerprint of a transaction's identifying content,
/// independent of its pending/booked state. Produced by
/// [`derive_key`](crate::anonymization::key::derive_key); the same
/// transaction re-fetched verbatim always yields the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TransactionKey(String);

impl TransactionKey {
    /// Creates a new TransactionKey from an already-derived key string
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TransactionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TransactionKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
