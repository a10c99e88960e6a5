//! Diesel row models for message persistence.

use super::schema::messages;
use diesel::prelude::*;

/// Query result row for message records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = messages)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MessageRow {
    /// Store-assigned message identifier.
    pub id: i64,
    /// Sending participant.
    pub sender: String,
    /// Receiving participant.
    pub receiver: String,
    /// Listing the conversation is about.
    pub listing_ref: String,
    /// Message text.
    pub body: String,
}

/// Insert model for message records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = messages)]
pub struct NewMessageRow {
    /// Sending participant.
    pub sender: String,
    /// Receiving participant.
    pub receiver: String,
    /// Listing the conversation is about.
    pub listing_ref: String,
    /// Message text.
    pub body: String,
}
