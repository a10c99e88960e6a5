//! Translation of catalogue filters into SQL query fragments.

use super::schema::listings;
use crate::catalog::domain::SearchFilters;
use diesel::pg::Pg;
use diesel::prelude::*;

diesel::define_sql_function! {
    /// SQL `lower`, used for case-insensitive category equality.
    fn lower(value: diesel::sql_types::Text) -> diesel::sql_types::Text;
}

/// Boxed listings query with the active filters erased into the box.
pub(crate) type BoxedListingQuery = listings::BoxedQuery<'static, Pg>;

/// Escapes `LIKE` wildcards in the needle and wraps it for substring
/// matching. `PostgreSQL` treats backslash as the default escape character.
pub(crate) fn like_pattern(needle: &str) -> String {
    let escaped = needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

/// Translates the active filters into a conjunctive boxed query.
///
/// The free-text predicate spans title, description, and year; category
/// compares whole labels; location matches substrings; price bounds are
/// inclusive. Inactive filters contribute no SQL at all.
pub(crate) fn filtered_listings(filters: &SearchFilters) -> BoxedListingQuery {
    let mut query = listings::table.into_boxed();
    if let Some(needle) = filters.search_text() {
        let pattern = like_pattern(needle);
        query = query.filter(
            listings::title
                .ilike(pattern.clone())
                .or(listings::description.ilike(pattern.clone()))
                .or(listings::year.ilike(pattern)),
        );
    }
    if let Some(name) = filters.category_name() {
        query = query.filter(lower(listings::category).eq(name.to_lowercase()));
    }
    if let Some(place) = filters.location_text() {
        query = query.filter(listings::location.ilike(like_pattern(place)));
    }
    if let Some(floor) = filters.min_price() {
        query = query.filter(listings::price.ge(floor));
    }
    if let Some(ceiling) = filters.max_price() {
        query = query.filter(listings::price.le(ceiling));
    }
    query
}
