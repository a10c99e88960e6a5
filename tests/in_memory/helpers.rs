//! Shared test helpers for in-memory end-to-end tests.

use carboot::account::{
    adapters::memory::InMemoryAccountStore,
    domain::Account,
    services::{AccountService, RegisterAccountRequest},
};
use carboot::catalog::{
    adapters::memory::{InMemoryImageStore, InMemoryListingStore},
    domain::Listing,
    services::{CatalogSearchService, ListingPublicationService, PostListingRequest},
};
use carboot::messaging::{
    adapters::memory::InMemoryMessageStore,
    domain::Message,
    services::{ConversationService, PostMessageRequest},
};
use rstest::fixture;
use std::io;
use std::sync::Arc;
use tokio::runtime::Runtime;

/// The marketplace services wired over shared in-memory stores.
///
/// All services see the same account directory, and the search service
/// reads the listing store the publication service writes.
pub struct Marketplace {
    /// Account registration and lookup.
    pub accounts: AccountService<InMemoryAccountStore>,
    /// Messaging between buyers and sellers.
    pub conversations: ConversationService<InMemoryMessageStore, InMemoryAccountStore>,
    /// Listing publication.
    pub publications:
        ListingPublicationService<InMemoryListingStore, InMemoryAccountStore, InMemoryImageStore>,
    /// Catalogue browsing and search.
    pub search: CatalogSearchService<InMemoryListingStore>,
}

/// Provides a tokio runtime for async operations in tests.
///
/// # Errors
///
/// Returns an error if the runtime cannot be created.
#[fixture]
pub fn runtime() -> io::Result<Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Provides freshly wired marketplace services for each test.
#[fixture]
pub fn marketplace() -> Marketplace {
    let directory = Arc::new(InMemoryAccountStore::new());
    let listings = Arc::new(InMemoryListingStore::new());
    Marketplace {
        accounts: AccountService::new(Arc::clone(&directory)),
        conversations: ConversationService::new(
            Arc::new(InMemoryMessageStore::new()),
            Arc::clone(&directory),
        ),
        publications: ListingPublicationService::new(
            Arc::clone(&listings),
            directory,
            Arc::new(InMemoryImageStore::new()),
        ),
        search: CatalogSearchService::new(listings),
    }
}

/// Registers an account and returns it.
///
/// # Errors
///
/// Returns an error if registration fails.
pub fn register(
    rt: &Runtime,
    market: &Marketplace,
    username: &str,
    email: &str,
) -> Result<Account, Box<dyn std::error::Error + Send + Sync>> {
    Ok(rt.block_on(
        market
            .accounts
            .register(RegisterAccountRequest::new(username, email)),
    )?)
}

/// Posts a message and returns it with its assigned identifier.
///
/// # Errors
///
/// Returns an error if posting fails.
pub fn post(
    rt: &Runtime,
    market: &Marketplace,
    sender: &str,
    receiver: &str,
    listing: &str,
    body: &str,
) -> Result<Message, Box<dyn std::error::Error + Send + Sync>> {
    Ok(rt.block_on(
        market
            .conversations
            .post_message(PostMessageRequest::new(sender, receiver, listing, body)),
    )?)
}

/// Publishes a listing for a registered owner and returns it.
///
/// # Errors
///
/// Returns an error if publication fails.
pub fn publish(
    rt: &Runtime,
    market: &Marketplace,
    owner: &str,
    title: &str,
    price: i64,
) -> Result<Listing, Box<dyn std::error::Error + Send + Sync>> {
    Ok(rt.block_on(
        market
            .publications
            .post_listing(PostListingRequest::new(owner, title, price)),
    )?)
}

/// Registers the seller and buyer accounts and posts a short exchange about
/// one listing, returning the accounts in that order.
///
/// # Errors
///
/// Returns an error if registration or posting fails.
pub fn seed_conversation(
    rt: &Runtime,
    market: &Marketplace,
) -> Result<(Account, Account), Box<dyn std::error::Error + Send + Sync>> {
    let seller = register(rt, market, "magnus", "magnus@example.net")?;
    let buyer = register(rt, market, "astrid", "astrid@example.net")?;
    let buyer_ref = buyer.id().to_string();
    let seller_ref = seller.id().to_string();
    post(
        rt,
        market,
        &buyer_ref,
        &seller_ref,
        "ad-1",
        "Is the bike still available?",
    )?;
    post(
        rt,
        market,
        &seller_ref,
        &buyer_ref,
        "ad-1",
        "It is, come by on Saturday.",
    )?;
    Ok((seller, buyer))
}
