//! Store port for catalogue listings.

use crate::account::domain::Username;
use crate::catalog::domain::{Listing, ListingDraft, Page, PageRequest, SearchFilters};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for listing store operations.
pub type ListingStoreResult<T> = Result<T, ListingStoreError>;

/// Listing persistence contract.
///
/// Pages are served in ascending identifier order, and both paging
/// operations report the total match count alongside the page items.
#[async_trait]
pub trait ListingStore: Send + Sync {
    /// Publishes a listing and returns it with its assigned identifier.
    async fn insert(&self, draft: &ListingDraft) -> ListingStoreResult<Listing>;

    /// Returns one page of the whole catalogue.
    async fn find_all(&self, page: PageRequest) -> ListingStoreResult<Page<Listing>>;

    /// Returns one page of the listings satisfying every active filter.
    async fn search(
        &self,
        filters: &SearchFilters,
        page: PageRequest,
    ) -> ListingStoreResult<Page<Listing>>;

    /// Returns every listing published by the owner, oldest first.
    async fn find_by_owner(&self, owner: &Username) -> ListingStoreResult<Vec<Listing>>;
}

/// Errors returned by listing store implementations.
#[derive(Debug, Clone, Error)]
pub enum ListingStoreError {
    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted listing data: {0}")]
    InvalidRow(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ListingStoreError {
    /// Wraps a data-quality error from persisted rows.
    pub fn invalid_row(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidRow(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
