//! `PostgreSQL` account store implementation.

use super::{
    models::{AccountRow, NewAccountRow},
    schema::accounts,
};
use crate::account::{
    domain::{Account, AccountDraft, UserId, Username},
    ports::{AccountStore, AccountStoreError, AccountStoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by account adapters.
pub type AccountPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed account store.
#[derive(Debug, Clone)]
pub struct PostgresAccountStore {
    pool: AccountPgPool,
}

impl PostgresAccountStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: AccountPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> AccountStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> AccountStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(AccountStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(AccountStoreError::persistence)?
    }
}

#[async_trait]
impl AccountStore for PostgresAccountStore {
    async fn insert(&self, draft: &AccountDraft) -> AccountStoreResult<Account> {
        let username = draft.username().clone();
        let new_row = NewAccountRow {
            username: draft.username().as_str().to_owned(),
            email: draft.email().to_owned(),
        };

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(accounts::table)
                .values(&new_row)
                .get_result::<AccountRow>(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        AccountStoreError::DuplicateUsername(username.clone())
                    }
                    _ => AccountStoreError::persistence(err),
                })?;
            row_to_account(row)
        })
        .await
    }

    async fn find_by_id(&self, id: UserId) -> AccountStoreResult<Option<Account>> {
        // Identifiers beyond BIGINT range cannot exist in the table.
        let Ok(raw_id) = i64::try_from(id.value()) else {
            return Ok(None);
        };
        self.run_blocking(move |connection| {
            let row = accounts::table
                .filter(accounts::id.eq(raw_id))
                .select(AccountRow::as_select())
                .first::<AccountRow>(connection)
                .optional()
                .map_err(AccountStoreError::persistence)?;
            row.map(row_to_account).transpose()
        })
        .await
    }

    async fn find_by_username(&self, username: &Username) -> AccountStoreResult<Option<Account>> {
        let login = username.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = accounts::table
                .filter(accounts::username.eq(login))
                .select(AccountRow::as_select())
                .first::<AccountRow>(connection)
                .optional()
                .map_err(AccountStoreError::persistence)?;
            row.map(row_to_account).transpose()
        })
        .await
    }
}

/// Converts a persisted row into the domain account.
///
/// # Errors
///
/// Returns [`AccountStoreError::InvalidRow`] when the row holds a negative
/// identifier or an empty username.
pub fn row_to_account(row: AccountRow) -> AccountStoreResult<Account> {
    let AccountRow {
        id,
        username,
        email,
    } = row;
    let user_id = u64::try_from(id).map_err(AccountStoreError::invalid_row)?;
    let login = Username::new(username).map_err(AccountStoreError::invalid_row)?;
    Ok(Account::new(
        UserId::new(user_id),
        AccountDraft::new(login, email),
    ))
}
