//! Store port for account persistence and lookup.

use crate::account::domain::{Account, AccountDraft, UserId, Username};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for account store operations.
pub type AccountStoreResult<T> = Result<T, AccountStoreError>;

/// Account persistence contract.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Stores a new account and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AccountStoreError::DuplicateUsername`] when the username is
    /// already registered.
    async fn insert(&self, draft: &AccountDraft) -> AccountStoreResult<Account>;

    /// Finds an account by store-assigned identifier.
    ///
    /// Returns `None` when the account does not exist.
    async fn find_by_id(&self, id: UserId) -> AccountStoreResult<Option<Account>>;

    /// Finds an account by unique username.
    ///
    /// Returns `None` when no account has the given username.
    async fn find_by_username(&self, username: &Username) -> AccountStoreResult<Option<Account>>;
}

/// Errors returned by account store implementations.
#[derive(Debug, Clone, Error)]
pub enum AccountStoreError {
    /// An account with the same username already exists.
    #[error("duplicate username: {0}")]
    DuplicateUsername(Username),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted account data: {0}")]
    InvalidRow(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl AccountStoreError {
    /// Wraps a data-quality error from persisted rows.
    pub fn invalid_row(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidRow(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
