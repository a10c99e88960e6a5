//! Account record and its draft form.

use super::{UserId, Username};
use serde::{Deserialize, Serialize};

/// Registered marketplace account.
///
/// Credential storage and verification live outside the crate; the account
/// carries only the identity fields the other contexts need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    id: UserId,
    username: Username,
    email: String,
}

impl Account {
    /// Creates an account from a store-assigned identifier and draft data.
    #[must_use]
    pub fn new(id: UserId, draft: AccountDraft) -> Self {
        let AccountDraft { username, email } = draft;
        Self {
            id,
            username,
            email,
        }
    }

    /// Returns the store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the unique username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the contact email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Pre-insert account data; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountDraft {
    username: Username,
    email: String,
}

impl AccountDraft {
    /// Creates a draft from a validated username and contact email.
    #[must_use]
    pub fn new(username: Username, email: impl Into<String>) -> Self {
        Self {
            username,
            email: email.into(),
        }
    }

    /// Returns the username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    /// Returns the contact email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}
