//! Diesel row models for account persistence.

use super::schema::accounts;
use diesel::prelude::*;

/// Query result row for account records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = accounts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AccountRow {
    /// Store-assigned account identifier.
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Contact email address.
    pub email: String,
}

/// Insert model for account records; the database assigns the identifier.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = accounts)]
pub struct NewAccountRow {
    /// Unique login name.
    pub username: String,
    /// Contact email address.
    pub email: String,
}
