//! Catalogue domain model.

mod error;
mod filter;
mod ids;
mod listing;
mod page;

pub use error::CatalogDomainError;
pub use filter::SearchFilters;
pub use ids::ListingId;
pub use listing::{Listing, ListingDraft};
pub use page::{Page, PageRequest};
