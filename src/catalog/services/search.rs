//! Service layer for catalogue search and paging.

use crate::catalog::{
    domain::{Listing, Page, PageRequest, SearchFilters},
    ports::{ListingStore, ListingStoreError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for catalogue search operations.
#[derive(Debug, Error)]
pub enum CatalogSearchError {
    /// Listing store operation failed.
    #[error(transparent)]
    Store(#[from] ListingStoreError),
}

/// Result type for catalogue search operations.
pub type CatalogSearchResult<T> = Result<T, CatalogSearchError>;

/// Catalogue search service.
#[derive(Clone)]
pub struct CatalogSearchService<L>
where
    L: ListingStore,
{
    listings: Arc<L>,
}

impl<L> CatalogSearchService<L>
where
    L: ListingStore,
{
    /// Creates a new catalogue search service.
    #[must_use]
    pub const fn new(listings: Arc<L>) -> Self {
        Self { listings }
    }

    /// Returns one catalogue page under the given filters.
    ///
    /// A filter set with no active predicate routes to unfiltered paging;
    /// the page served is the same either way.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogSearchError::Store`] when the lookup fails.
    pub async fn search_listings(
        &self,
        filters: &SearchFilters,
        page: PageRequest,
    ) -> CatalogSearchResult<Page<Listing>> {
        if filters.has_filters() {
            Ok(self.listings.search(filters, page).await?)
        } else {
            Ok(self.listings.find_all(page).await?)
        }
    }
}
