//! Services exposed by the catalogue context.

mod publication;
mod search;

pub use publication::{
    ListingPublicationError, ListingPublicationResult, ListingPublicationService,
    PostListingRequest,
};
pub use search::{CatalogSearchError, CatalogSearchResult, CatalogSearchService};
