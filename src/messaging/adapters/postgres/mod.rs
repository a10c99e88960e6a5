//! `PostgreSQL` adapters for the messaging context.

mod models;
pub(crate) mod queries;
mod repository;
pub(crate) mod schema;

pub use models::{MessageRow, NewMessageRow};
pub use repository::{MessagingPgPool, PostgresMessageStore, row_to_message};
