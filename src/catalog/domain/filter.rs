//! Catalogue search filters.

use super::Listing;
use serde::{Deserialize, Serialize};

/// Optional, conjunctive catalogue filters.
///
/// Every filter left unset passes every listing; set filters must all hold
/// for a listing to match. Empty strings count as unset, while whitespace
/// is a real predicate. All text matching ignores case.
///
/// # Examples
///
/// ```
/// use carboot::catalog::domain::SearchFilters;
///
/// let filters = SearchFilters::default()
///     .with_category("Vans")
///     .with_max_price(2_500);
/// assert!(filters.has_filters());
/// assert!(!SearchFilters::default().has_filters());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchFilters {
    search: Option<String>,
    category: Option<String>,
    location: Option<String>,
    min_price: Option<i64>,
    max_price: Option<i64>,
}

impl SearchFilters {
    /// Sets the free-text predicate matched against title, description, and
    /// year.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Sets the category predicate, matched by whole-label equality.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the location predicate, matched as a substring.
    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the inclusive lower price bound.
    #[must_use]
    pub const fn with_min_price(mut self, min_price: i64) -> Self {
        self.min_price = Some(min_price);
        self
    }

    /// Sets the inclusive upper price bound.
    #[must_use]
    pub const fn with_max_price(mut self, max_price: i64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    /// Returns the free-text predicate, treating the empty string as unset.
    #[must_use]
    pub fn search_text(&self) -> Option<&str> {
        normalised(self.search.as_deref())
    }

    /// Returns the category predicate, treating the empty string as unset.
    #[must_use]
    pub fn category_name(&self) -> Option<&str> {
        normalised(self.category.as_deref())
    }

    /// Returns the location predicate, treating the empty string as unset.
    #[must_use]
    pub fn location_text(&self) -> Option<&str> {
        normalised(self.location.as_deref())
    }

    /// Returns the inclusive lower price bound.
    #[must_use]
    pub const fn min_price(&self) -> Option<i64> {
        self.min_price
    }

    /// Returns the inclusive upper price bound.
    #[must_use]
    pub const fn max_price(&self) -> Option<i64> {
        self.max_price
    }

    /// Reports whether any predicate is active.
    #[must_use]
    pub fn has_filters(&self) -> bool {
        self.search_text().is_some()
            || self.category_name().is_some()
            || self.location_text().is_some()
            || self.min_price.is_some()
            || self.max_price.is_some()
    }

    /// Reports whether the listing satisfies every active predicate.
    #[must_use]
    pub fn matches(&self, listing: &Listing) -> bool {
        self.matches_search(listing)
            && self.matches_category(listing)
            && self.matches_location(listing)
            && self.matches_price(listing)
    }

    fn matches_search(&self, listing: &Listing) -> bool {
        self.search_text().is_none_or(|needle| {
            contains_ignore_case(listing.title(), needle)
                || contains_ignore_case(listing.description(), needle)
                || contains_ignore_case(listing.year(), needle)
        })
    }

    fn matches_category(&self, listing: &Listing) -> bool {
        self.category_name()
            .is_none_or(|name| listing.category().to_lowercase() == name.to_lowercase())
    }

    fn matches_location(&self, listing: &Listing) -> bool {
        self.location_text()
            .is_none_or(|needle| contains_ignore_case(listing.location(), needle))
    }

    fn matches_price(&self, listing: &Listing) -> bool {
        self.min_price.is_none_or(|floor| listing.price() >= floor)
            && self.max_price.is_none_or(|ceiling| listing.price() <= ceiling)
    }
}

/// Treats the empty string as an unset predicate.
fn normalised(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

/// Case-insensitive substring containment.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
