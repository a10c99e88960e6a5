//! Diesel row models for catalogue persistence.

use super::schema::listings;
use diesel::prelude::*;

/// Query result row for listing records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = listings)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ListingRow {
    /// Store-assigned listing identifier.
    pub id: i64,
    /// Owning account identifier.
    pub owner_id: i64,
    /// Owning account username.
    pub owner_username: String,
    /// Listing title.
    pub title: String,
    /// Asking price.
    pub price: i64,
    /// Category label, empty when none was given.
    pub category: String,
    /// Seller's location, empty when none was given.
    pub location: String,
    /// Model year text, empty when none was given.
    pub year: String,
    /// Mileage text, empty when none was given.
    pub mileage: String,
    /// Free-text description.
    pub description: String,
    /// Public path of the uploaded image, if any.
    pub image_path: Option<String>,
}

/// Insert model for listing records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = listings)]
pub struct NewListingRow {
    /// Owning account identifier.
    pub owner_id: i64,
    /// Owning account username.
    pub owner_username: String,
    /// Listing title.
    pub title: String,
    /// Asking price.
    pub price: i64,
    /// Category label, empty when none was given.
    pub category: String,
    /// Seller's location, empty when none was given.
    pub location: String,
    /// Model year text, empty when none was given.
    pub year: String,
    /// Mileage text, empty when none was given.
    pub mileage: String,
    /// Free-text description.
    pub description: String,
    /// Public path of the uploaded image, if any.
    pub image_path: Option<String>,
}
