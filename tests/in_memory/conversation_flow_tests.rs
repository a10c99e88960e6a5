//! Buyer-seller conversation flows over the in-memory stores.
//!
//! Covers posting, symmetric thread resolution, listing separation, and
//! inbox aggregation with display-name enrichment.

use crate::in_memory::helpers::{Marketplace, marketplace, post, runtime, seed_conversation};
use carboot::messaging::{domain::Message, services::ThreadRequest};
use rstest::rstest;
use std::io;
use tokio::runtime::Runtime;

/// Tests that a thread reads the same regardless of who is named first.
#[rstest]
fn resolves_a_symmetric_thread(
    runtime: io::Result<Runtime>,
    marketplace: Marketplace,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let (seller, buyer) = seed_conversation(&rt, &marketplace)?;

    let forward = rt.block_on(marketplace.conversations.thread(ThreadRequest::new(
        buyer.id().to_string(),
        seller.id().to_string(),
        "ad-1",
    )))?;
    let reverse = rt.block_on(marketplace.conversations.thread(ThreadRequest::new(
        seller.id().to_string(),
        buyer.id().to_string(),
        "ad-1",
    )))?;

    let bodies: Vec<&str> = forward.iter().map(Message::body).collect();
    assert_eq!(
        bodies,
        ["Is the bike still available?", "It is, come by on Saturday."]
    );
    let ids: Vec<u64> = forward.iter().map(|message| message.id().value()).collect();
    assert_eq!(ids, [1, 2]);
    assert_eq!(forward, reverse);
    Ok(())
}

/// Tests that conversations about different listings never mix.
#[rstest]
fn separates_listings_for_the_same_pair(
    runtime: io::Result<Runtime>,
    marketplace: Marketplace,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let (seller, buyer) = seed_conversation(&rt, &marketplace)?;
    post(
        &rt,
        &marketplace,
        &buyer.id().to_string(),
        &seller.id().to_string(),
        "ad-2",
        "Interested in the kayak too.",
    )?;

    let kayak_thread = rt.block_on(marketplace.conversations.thread(ThreadRequest::new(
        buyer.id().to_string(),
        seller.id().to_string(),
        "ad-2",
    )))?;

    let bodies: Vec<&str> = kayak_thread.iter().map(Message::body).collect();
    assert_eq!(bodies, ["Interested in the kayak too."]);
    Ok(())
}

/// Tests that the inbox keeps one newest message per conversation, newest
/// conversation first, with counterpart display names resolved.
#[rstest]
fn aggregates_the_inbox_newest_first(
    runtime: io::Result<Runtime>,
    marketplace: Marketplace,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let (seller, _) = seed_conversation(&rt, &marketplace)?;
    post(
        &rt,
        &marketplace,
        "999",
        &seller.id().to_string(),
        "ad-2",
        "Would you take 50 for it?",
    )?;

    let summaries = rt.block_on(marketplace.conversations.inbox(&seller.id().to_string()))?;

    let ids: Vec<u64> = summaries
        .iter()
        .map(|summary| summary.message().id().value())
        .collect();
    assert_eq!(ids, [3, 2]);
    let names: Vec<&str> = summaries
        .iter()
        .map(|summary| summary.counterpart_name())
        .collect();
    assert_eq!(names, ["User 999", "astrid"]);
    Ok(())
}

/// Tests that uninvolved participants see an empty inbox.
#[rstest]
fn serves_an_empty_inbox_to_uninvolved_participants(
    runtime: io::Result<Runtime>,
    marketplace: Marketplace,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    seed_conversation(&rt, &marketplace)?;

    let summaries = rt.block_on(marketplace.conversations.inbox("777"))?;

    assert!(summaries.is_empty());
    Ok(())
}
