//! In-memory account store for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::account::{
    domain::{Account, AccountDraft, UserId, Username},
    ports::{AccountStore, AccountStoreError, AccountStoreResult},
};

/// Thread-safe in-memory account store.
///
/// Identifiers are assigned from a counter starting at one, mirroring a
/// database sequence.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAccountStore {
    state: Arc<RwLock<InMemoryAccountState>>,
}

#[derive(Debug, Default)]
struct InMemoryAccountState {
    accounts: HashMap<UserId, Account>,
    username_index: HashMap<Username, UserId>,
    last_id: u64,
}

impl InMemoryAccountStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn insert(&self, draft: &AccountDraft) -> AccountStoreResult<Account> {
        let mut state = self.state.write().map_err(|err| {
            AccountStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;

        if state.username_index.contains_key(draft.username()) {
            return Err(AccountStoreError::DuplicateUsername(
                draft.username().clone(),
            ));
        }

        state.last_id = state.last_id.saturating_add(1);
        let account = Account::new(UserId::new(state.last_id), draft.clone());
        state
            .username_index
            .insert(account.username().clone(), account.id());
        state.accounts.insert(account.id(), account.clone());
        Ok(account)
    }

    async fn find_by_id(&self, id: UserId) -> AccountStoreResult<Option<Account>> {
        let state = self.state.read().map_err(|err| {
            AccountStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        Ok(state.accounts.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> AccountStoreResult<Option<Account>> {
        let state = self.state.read().map_err(|err| {
            AccountStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let account = state
            .username_index
            .get(username)
            .and_then(|id| state.accounts.get(id))
            .cloned();
        Ok(account)
    }
}
