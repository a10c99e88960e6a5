//! `PostgreSQL` adapters for the catalogue context.

mod models;
pub(crate) mod queries;
mod repository;
pub(crate) mod schema;

pub use models::{ListingRow, NewListingRow};
pub use repository::{CatalogPgPool, PostgresListingStore, row_to_listing};
