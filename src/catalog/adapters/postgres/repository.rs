//! `PostgreSQL` listing store implementation.

use super::{
    models::{ListingRow, NewListingRow},
    queries::{BoxedListingQuery, filtered_listings},
    schema::listings,
};
use crate::account::domain::{UserId, Username};
use crate::catalog::{
    domain::{Listing, ListingDraft, ListingId, Page, PageRequest, SearchFilters},
    ports::{ListingStore, ListingStoreError, ListingStoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by catalogue adapters.
pub type CatalogPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed listing store.
#[derive(Debug, Clone)]
pub struct PostgresListingStore {
    pool: CatalogPgPool,
}

impl PostgresListingStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: CatalogPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ListingStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ListingStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ListingStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ListingStoreError::persistence)?
    }
}

#[async_trait]
impl ListingStore for PostgresListingStore {
    async fn insert(&self, draft: &ListingDraft) -> ListingStoreResult<Listing> {
        let new_row = to_new_row(draft)?;
        self.run_blocking(move |connection| {
            let row = diesel::insert_into(listings::table)
                .values(&new_row)
                .get_result::<ListingRow>(connection)
                .map_err(ListingStoreError::persistence)?;
            row_to_listing(row)
        })
        .await
    }

    async fn find_all(&self, page: PageRequest) -> ListingStoreResult<Page<Listing>> {
        self.run_blocking(move |connection| load_page(connection, None, page))
            .await
    }

    async fn search(
        &self,
        filters: &SearchFilters,
        page: PageRequest,
    ) -> ListingStoreResult<Page<Listing>> {
        let active = filters.clone();
        self.run_blocking(move |connection| load_page(connection, Some(&active), page))
            .await
    }

    async fn find_by_owner(&self, owner: &Username) -> ListingStoreResult<Vec<Listing>> {
        let owner_name = owner.as_str().to_owned();
        self.run_blocking(move |connection| {
            let rows = listings::table
                .filter(listings::owner_username.eq(owner_name))
                .order(listings::id.asc())
                .select(ListingRow::as_select())
                .load::<ListingRow>(connection)
                .map_err(ListingStoreError::persistence)?;
            rows.into_iter().map(row_to_listing).collect()
        })
        .await
    }
}

/// Starts a listings query from the optional filter set.
fn boxed_listings(filters: Option<&SearchFilters>) -> BoxedListingQuery {
    filters.map_or_else(|| listings::table.into_boxed(), filtered_listings)
}

/// Loads one catalogue page: the total match count plus the page rows,
/// both under the same filters.
fn load_page(
    connection: &mut PgConnection,
    filters: Option<&SearchFilters>,
    page: PageRequest,
) -> ListingStoreResult<Page<Listing>> {
    let total_raw = boxed_listings(filters)
        .count()
        .get_result::<i64>(connection)
        .map_err(ListingStoreError::persistence)?;
    let total = u64::try_from(total_raw).map_err(ListingStoreError::persistence)?;

    let offset = i64::try_from(page.offset()).map_err(ListingStoreError::persistence)?;
    let rows = boxed_listings(filters)
        .order(listings::id.asc())
        .limit(i64::from(page.size()))
        .offset(offset)
        .select(ListingRow::as_select())
        .load::<ListingRow>(connection)
        .map_err(ListingStoreError::persistence)?;
    let items = rows
        .into_iter()
        .map(row_to_listing)
        .collect::<ListingStoreResult<Vec<_>>>()?;
    Ok(Page::new(items, page, total))
}

/// Builds the insert model, converting the owner identifier to its column
/// type.
fn to_new_row(draft: &ListingDraft) -> ListingStoreResult<NewListingRow> {
    let owner_id =
        i64::try_from(draft.owner_id().value()).map_err(ListingStoreError::persistence)?;
    Ok(NewListingRow {
        owner_id,
        owner_username: draft.owner_username().as_str().to_owned(),
        title: draft.title().to_owned(),
        price: draft.price(),
        category: draft.category().to_owned(),
        location: draft.location().to_owned(),
        year: draft.year().to_owned(),
        mileage: draft.mileage().to_owned(),
        description: draft.description().to_owned(),
        image_path: draft.image_path().map(str::to_owned),
    })
}

/// Converts a persisted row into the domain listing.
///
/// # Errors
///
/// Returns [`ListingStoreError::InvalidRow`] when the row holds negative
/// identifiers or an empty owner username.
pub fn row_to_listing(row: ListingRow) -> ListingStoreResult<Listing> {
    let ListingRow {
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
    } = row;
    let listing_id = u64::try_from(id).map_err(ListingStoreError::invalid_row)?;
    let owner = u64::try_from(owner_id).map_err(ListingStoreError::invalid_row)?;
    let owner_name = Username::new(owner_username).map_err(ListingStoreError::invalid_row)?;
    let mut draft = ListingDraft::new(UserId::new(owner), owner_name, title, price)
        .with_category(category)
        .with_location(location)
        .with_year(year)
        .with_mileage(mileage)
        .with_description(description);
    if let Some(path) = image_path {
        draft = draft.with_image_path(path);
    }
    Ok(Listing::new(ListingId::new(listing_id), draft))
}
