//! Catalogue publication and search flows over the in-memory stores.

use crate::in_memory::helpers::{Marketplace, marketplace, publish, register, runtime};
use carboot::catalog::{
    domain::{Listing, PageRequest, SearchFilters},
    services::PostListingRequest,
};
use rstest::rstest;
use std::io;
use tokio::runtime::Runtime;

/// Tests that published listings come back in pages, oldest first.
#[rstest]
fn publishes_and_pages_the_catalogue(
    runtime: io::Result<Runtime>,
    marketplace: Marketplace,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    register(&rt, &marketplace, "magnus", "magnus@example.net")?;
    for title in ["Bike", "Kayak", "Desk"] {
        publish(&rt, &marketplace, "magnus", title, 100)?;
    }

    let first = rt.block_on(
        marketplace
            .search
            .search_listings(&SearchFilters::default(), PageRequest::new(0, 2)?),
    )?;
    let second = rt.block_on(
        marketplace
            .search
            .search_listings(&SearchFilters::default(), PageRequest::new(1, 2)?),
    )?;

    let titles: Vec<&str> = first.items().iter().map(Listing::title).collect();
    assert_eq!(titles, ["Bike", "Kayak"]);
    assert_eq!(first.total(), 3);
    assert_eq!(first.total_pages(), 2);
    let rest: Vec<&str> = second.items().iter().map(Listing::title).collect();
    assert_eq!(rest, ["Desk"]);
    Ok(())
}

/// Tests that conjunctive filters narrow the published catalogue.
#[rstest]
fn filters_the_published_catalogue(
    runtime: io::Result<Runtime>,
    marketplace: Marketplace,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    register(&rt, &marketplace, "magnus", "magnus@example.net")?;
    rt.block_on(
        marketplace.publications.post_listing(
            PostListingRequest::new("magnus", "Volvo 240 estate", 3_500)
                .with_category("Cars")
                .with_location("Oslo"),
        ),
    )?;
    rt.block_on(
        marketplace.publications.post_listing(
            PostListingRequest::new("magnus", "Saab 900 turbo", 5_200)
                .with_category("Cars")
                .with_location("Bergen"),
        ),
    )?;
    rt.block_on(
        marketplace.publications.post_listing(
            PostListingRequest::new("magnus", "Road bike", 450).with_category("Bikes"),
        ),
    )?;

    let filters = SearchFilters::default()
        .with_category("cars")
        .with_max_price(4_000);
    let matched = rt.block_on(
        marketplace
            .search
            .search_listings(&filters, PageRequest::new(0, 10)?),
    )?;

    let titles: Vec<&str> = matched.items().iter().map(Listing::title).collect();
    assert_eq!(titles, ["Volvo 240 estate"]);
    assert_eq!(matched.total(), 1);
    Ok(())
}

/// Tests that an all-matching filter serves the same page as no filter.
#[rstest]
fn unfiltered_and_all_matching_search_serve_the_same_page(
    runtime: io::Result<Runtime>,
    marketplace: Marketplace,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    register(&rt, &marketplace, "magnus", "magnus@example.net")?;
    for (title, price) in [("Bike", 120), ("Kayak", 400), ("Desk", 60)] {
        publish(&rt, &marketplace, "magnus", title, price)?;
    }

    let unfiltered = rt.block_on(
        marketplace
            .search
            .search_listings(&SearchFilters::default(), PageRequest::new(0, 2)?),
    )?;
    let all_matching = rt.block_on(marketplace.search.search_listings(
        &SearchFilters::default().with_min_price(0),
        PageRequest::new(0, 2)?,
    ))?;

    assert_eq!(unfiltered, all_matching);
    Ok(())
}

/// Tests that a listing published with an image carries its public path.
#[rstest]
fn publishes_listing_images(
    runtime: io::Result<Runtime>,
    marketplace: Marketplace,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    register(&rt, &marketplace, "magnus", "magnus@example.net")?;

    let listing = rt.block_on(
        marketplace.publications.post_listing(
            PostListingRequest::new("magnus", "Volvo 240 estate", 3_500)
                .with_image(vec![0xff, 0xd8, 0xff]),
        ),
    )?;

    assert_eq!(listing.image_path(), Some("/uploads/image_1.jpg"));
    Ok(())
}

/// Tests that owners see exactly their own listings, oldest first.
#[rstest]
fn lists_listings_by_owner(
    runtime: io::Result<Runtime>,
    marketplace: Marketplace,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    register(&rt, &marketplace, "magnus", "magnus@example.net")?;
    register(&rt, &marketplace, "astrid", "astrid@example.net")?;
    publish(&rt, &marketplace, "magnus", "Bike", 120)?;
    publish(&rt, &marketplace, "astrid", "Desk", 60)?;
    publish(&rt, &marketplace, "magnus", "Kayak", 400)?;

    let owned = rt.block_on(marketplace.publications.listings_by_owner("magnus"))?;

    let titles: Vec<&str> = owned.iter().map(Listing::title).collect();
    assert_eq!(titles, ["Bike", "Kayak"]);
    Ok(())
}
