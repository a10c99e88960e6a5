//! Listing record and its draft form.

use super::ListingId;
use crate::account::domain::{UserId, Username};
use serde::{Deserialize, Serialize};

/// Published catalogue listing.
///
/// Price is an integral amount in the site currency's smallest advertised
/// unit. Year and mileage stay free text because sellers enter them that
/// way; search treats them as text too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    id: ListingId,
    owner_id: UserId,
    owner_username: Username,
    title: String,
    price: i64,
    category: String,
    location: String,
    year: String,
    mileage: String,
    description: String,
    image_path: Option<String>,
}

impl Listing {
    /// Creates a listing from a store-assigned identifier and draft data.
    #[must_use]
    pub fn new(id: ListingId, draft: ListingDraft) -> Self {
        let ListingDraft {
            owner_id,
            owner_username,
            title,
            price,
            category,
            location,
            year,
            mileage,
            description,
            image_path,
        } = draft;
        Self {
            id,
            owner_id,
            owner_username,
            title,
            price,
            category,
            location,
            year,
            mileage,
            description,
            image_path,
        }
    }

    /// Returns the store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> ListingId {
        self.id
    }

    /// Returns the owning account's identifier.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns the owning account's username.
    #[must_use]
    pub const fn owner_username(&self) -> &Username {
        &self.owner_username
    }

    /// Returns the listing title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the asking price.
    #[must_use]
    pub const fn price(&self) -> i64 {
        self.price
    }

    /// Returns the category label, empty when none was given.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the seller's location, empty when none was given.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the model year text, empty when none was given.
    #[must_use]
    pub fn year(&self) -> &str {
        &self.year
    }

    /// Returns the mileage text, empty when none was given.
    #[must_use]
    pub fn mileage(&self) -> &str {
        &self.mileage
    }

    /// Returns the free-text description, empty when none was given.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the public path of the listing image, if one was uploaded.
    #[must_use]
    pub fn image_path(&self) -> Option<&str> {
        self.image_path.as_deref()
    }
}

/// Pre-insert listing data; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingDraft {
    owner_id: UserId,
    owner_username: Username,
    title: String,
    price: i64,
    category: String,
    location: String,
    year: String,
    mileage: String,
    description: String,
    image_path: Option<String>,
}

impl ListingDraft {
    /// Creates a draft with the required owner, title, and price.
    #[must_use]
    pub fn new(
        owner_id: UserId,
        owner_username: Username,
        title: impl Into<String>,
        price: i64,
    ) -> Self {
        Self {
            owner_id,
            owner_username,
            title: title.into(),
            price,
            category: String::new(),
            location: String::new(),
            year: String::new(),
            mileage: String::new(),
            description: String::new(),
            image_path: None,
        }
    }

    /// Sets the category label.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the seller's location.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the model year text.
    #[must_use]
    pub fn with_year(mut self, year: impl Into<String>) -> Self {
        self.year = year.into();
        self
    }

    /// Sets the mileage text.
    #[must_use]
    pub fn with_mileage(mut self, mileage: impl Into<String>) -> Self {
        self.mileage = mileage.into();
        self
    }

    /// Sets the free-text description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the public path of an uploaded listing image.
    #[must_use]
    pub fn with_image_path(mut self, image_path: impl Into<String>) -> Self {
        self.image_path = Some(image_path.into());
        self
    }

    /// Returns the owning account's identifier.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns the owning account's username.
    #[must_use]
    pub const fn owner_username(&self) -> &Username {
        &self.owner_username
    }

    /// Returns the listing title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the asking price.
    #[must_use]
    pub const fn price(&self) -> i64 {
        self.price
    }

    /// Returns the category label.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the seller's location.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Returns the model year text.
    #[must_use]
    pub fn year(&self) -> &str {
        &self.year
    }

    /// Returns the mileage text.
    #[must_use]
    pub fn mileage(&self) -> &str {
        &self.mileage
    }

    /// Returns the free-text description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the public path of an uploaded listing image.
    #[must_use]
    pub fn image_path(&self) -> Option<&str> {
        self.image_path.as_deref()
    }
}
