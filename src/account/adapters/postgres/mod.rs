//! `PostgreSQL` adapters for account persistence.

mod models;
mod repository;
mod schema;

pub use models::{AccountRow, NewAccountRow};
pub use repository::{AccountPgPool, PostgresAccountStore, row_to_account};
