//! Service layer for account registration and lookup.

use crate::account::{
    domain::{Account, AccountDomainError, AccountDraft, UserId, Username},
    ports::{AccountStore, AccountStoreError},
};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for registering a marketplace account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterAccountRequest {
    username: String,
    email: String,
}

impl RegisterAccountRequest {
    /// Creates a request with the required registration fields.
    #[must_use]
    pub fn new(username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
        }
    }
}

/// Service-level errors for account operations.
#[derive(Debug, Error)]
pub enum AccountServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] AccountDomainError),
    /// Store operation failed.
    #[error(transparent)]
    Store(#[from] AccountStoreError),
}

/// Result type for account service operations.
pub type AccountServiceResult<T> = Result<T, AccountServiceError>;

/// Account registration and lookup service.
#[derive(Clone)]
pub struct AccountService<S>
where
    S: AccountStore,
{
    store: Arc<S>,
}

impl<S> AccountService<S>
where
    S: AccountStore,
{
    /// Creates a new account service.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AccountServiceError::Domain`] when the username is empty
    /// and [`AccountServiceError::Store`] when the username is taken or
    /// persistence fails.
    pub async fn register(&self, request: RegisterAccountRequest) -> AccountServiceResult<Account> {
        let username = Username::new(request.username)?;
        let draft = AccountDraft::new(username, request.email);
        Ok(self.store.insert(&draft).await?)
    }

    /// Finds an account by username.
    ///
    /// Returns `Ok(None)` when no account has the given username.
    ///
    /// # Errors
    ///
    /// Returns [`AccountServiceError::Domain`] when the username is empty
    /// and [`AccountServiceError::Store`] when the lookup fails.
    pub async fn find_by_username(&self, username: &str) -> AccountServiceResult<Option<Account>> {
        let login = Username::new(username)?;
        Ok(self.store.find_by_username(&login).await?)
    }

    /// Finds an account by store-assigned identifier.
    ///
    /// Returns `Ok(None)` when the account does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AccountServiceError::Store`] when the lookup fails.
    pub async fn find_by_id(&self, id: u64) -> AccountServiceResult<Option<Account>> {
        Ok(self.store.find_by_id(UserId::new(id)).await?)
    }
}
