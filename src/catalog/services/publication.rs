//! Service layer for publishing listings.

use crate::account::{
    domain::{AccountDomainError, Username},
    ports::{AccountStore, AccountStoreError},
};
use crate::catalog::{
    domain::{Listing, ListingDraft},
    ports::{ImageStore, ImageStoreError, ListingStore, ListingStoreError},
};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for publishing a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostListingRequest {
    owner_username: String,
    title: String,
    price: i64,
    category: Option<String>,
    location: Option<String>,
    year: Option<String>,
    mileage: Option<String>,
    description: Option<String>,
    image: Option<Vec<u8>>,
}

impl PostListingRequest {
    /// Creates a request with the required owner, title, and price.
    #[must_use]
    pub fn new(owner_username: impl Into<String>, title: impl Into<String>, price: i64) -> Self {
        Self {
            owner_username: owner_username.into(),
            title: title.into(),
            price,
            category: None,
            location: None,
            year: None,
            mileage: None,
            description: None,
            image: None,
        }
    }

    /// Sets the category label.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the seller's location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the model year text.
    #[must_use]
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = Some(year.into());
        self
    }

    /// Sets the mileage text.
    #[must_use]
    pub fn with_mileage(mut self, mileage: impl Into<String>) -> Self {
        self.mileage = Some(mileage.into());
        self
    }

    /// Sets the free-text description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attaches raw image bytes to store alongside the listing.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<Vec<u8>>) -> Self {
        self.image = Some(image.into());
        self
    }
}

/// Service-level errors for listing publication.
#[derive(Debug, Error)]
pub enum ListingPublicationError {
    /// The named owner has no account.
    #[error("unknown listing owner: {0}")]
    UnknownOwner(String),
    /// Owner username failed validation.
    #[error(transparent)]
    Domain(#[from] AccountDomainError),
    /// Account directory lookup failed.
    #[error(transparent)]
    Directory(#[from] AccountStoreError),
    /// Listing store operation failed.
    #[error(transparent)]
    Store(#[from] ListingStoreError),
    /// Image store operation failed.
    #[error(transparent)]
    Images(#[from] ImageStoreError),
}

/// Result type for listing publication operations.
pub type ListingPublicationResult<T> = Result<T, ListingPublicationError>;

/// Listing publication orchestration service.
#[derive(Clone)]
pub struct ListingPublicationService<L, A, I>
where
    L: ListingStore,
    A: AccountStore,
    I: ImageStore,
{
    listings: Arc<L>,
    directory: Arc<A>,
    images: Arc<I>,
}

impl<L, A, I> ListingPublicationService<L, A, I>
where
    L: ListingStore,
    A: AccountStore,
    I: ImageStore,
{
    /// Creates a new publication service.
    #[must_use]
    pub const fn new(listings: Arc<L>, directory: Arc<A>, images: Arc<I>) -> Self {
        Self {
            listings,
            directory,
            images,
        }
    }

    /// Publishes a listing for an existing account, storing the attached
    /// image first when one is present.
    ///
    /// # Errors
    ///
    /// Returns [`ListingPublicationError`] when the owner is unknown or a
    /// store rejects the operation.
    pub async fn post_listing(
        &self,
        request: PostListingRequest,
    ) -> ListingPublicationResult<Listing> {
        let owner_name = Username::new(request.owner_username)?;
        let owner = self
            .directory
            .find_by_username(&owner_name)
            .await?
            .ok_or_else(|| ListingPublicationError::UnknownOwner(owner_name.to_string()))?;

        let mut draft = ListingDraft::new(owner.id(), owner_name, request.title, request.price);
        if let Some(category) = request.category {
            draft = draft.with_category(category);
        }
        if let Some(location) = request.location {
            draft = draft.with_location(location);
        }
        if let Some(year) = request.year {
            draft = draft.with_year(year);
        }
        if let Some(mileage) = request.mileage {
            draft = draft.with_mileage(mileage);
        }
        if let Some(description) = request.description {
            draft = draft.with_description(description);
        }
        if let Some(image) = request.image {
            let image_path = self.images.store_image(&image).await?;
            draft = draft.with_image_path(image_path);
        }

        let listing = self.listings.insert(&draft).await?;
        tracing::info!(
            "published listing {} for {}",
            listing.id(),
            listing.owner_username()
        );
        Ok(listing)
    }

    /// Returns every listing published by the named owner, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`ListingPublicationError`] when the username is invalid or
    /// the lookup fails.
    pub async fn listings_by_owner(&self, owner: &str) -> ListingPublicationResult<Vec<Listing>> {
        let owner_name = Username::new(owner)?;
        Ok(self.listings.find_by_owner(&owner_name).await?)
    }
}
