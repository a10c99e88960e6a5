//! In-memory listing store for catalogue tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::account::domain::Username;
use crate::catalog::{
    domain::{Listing, ListingDraft, ListingId, Page, PageRequest, SearchFilters},
    ports::{ListingStore, ListingStoreError, ListingStoreResult},
};

/// Thread-safe in-memory listing store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryListingStore {
    state: Arc<RwLock<InMemoryListingState>>,
}

#[derive(Debug, Default)]
struct InMemoryListingState {
    listings: HashMap<ListingId, Listing>,
    owner_index: HashMap<Username, Vec<ListingId>>,
    last_id: u64,
}

impl InMemoryListingStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Sorts matches into catalogue order and cuts the requested page.
fn paginate(mut matching: Vec<Listing>, page: PageRequest) -> ListingStoreResult<Page<Listing>> {
    matching.sort_by_key(Listing::id);
    let total = u64::try_from(matching.len()).map_err(ListingStoreError::persistence)?;
    let start = usize::try_from(page.offset()).unwrap_or(usize::MAX);
    let size = usize::try_from(page.size()).unwrap_or(usize::MAX);
    let items = matching.into_iter().skip(start).take(size).collect();
    Ok(Page::new(items, page, total))
}

#[async_trait]
impl ListingStore for InMemoryListingStore {
    async fn insert(&self, draft: &ListingDraft) -> ListingStoreResult<Listing> {
        let mut state = self
            .state
            .write()
            .map_err(|err| ListingStoreError::persistence(std::io::Error::other(err.to_string())))?;
        state.last_id = state.last_id.saturating_add(1);
        let listing = Listing::new(ListingId::new(state.last_id), draft.clone());
        state
            .owner_index
            .entry(listing.owner_username().clone())
            .or_default()
            .push(listing.id());
        state.listings.insert(listing.id(), listing.clone());
        Ok(listing)
    }

    async fn find_all(&self, page: PageRequest) -> ListingStoreResult<Page<Listing>> {
        let state = self
            .state
            .read()
            .map_err(|err| ListingStoreError::persistence(std::io::Error::other(err.to_string())))?;
        let all: Vec<Listing> = state.listings.values().cloned().collect();
        paginate(all, page)
    }

    async fn search(
        &self,
        filters: &SearchFilters,
        page: PageRequest,
    ) -> ListingStoreResult<Page<Listing>> {
        let state = self
            .state
            .read()
            .map_err(|err| ListingStoreError::persistence(std::io::Error::other(err.to_string())))?;
        let matching: Vec<Listing> = state
            .listings
            .values()
            .filter(|listing| filters.matches(listing))
            .cloned()
            .collect();
        paginate(matching, page)
    }

    async fn find_by_owner(&self, owner: &Username) -> ListingStoreResult<Vec<Listing>> {
        let state = self
            .state
            .read()
            .map_err(|err| ListingStoreError::persistence(std::io::Error::other(err.to_string())))?;
        let mut owned: Vec<Listing> = state
            .owner_index
            .get(owner)
            .map(|ids| {
                ids.iter()
                    .filter_map(|id| state.listings.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default();
        owned.sort_by_key(Listing::id);
        Ok(owned)
    }
}
