//! Account registration and lookup flows over the in-memory directory.

use crate::in_memory::helpers::{Marketplace, marketplace, register, runtime};
use carboot::account::{
    ports::AccountStoreError,
    services::{AccountServiceError, RegisterAccountRequest},
};
use rstest::rstest;
use std::io;
use tokio::runtime::Runtime;

/// Tests that a registered account resolves by username and identifier.
#[rstest]
fn registers_and_resolves_accounts(
    runtime: io::Result<Runtime>,
    marketplace: Marketplace,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let registered = register(&rt, &marketplace, "magnus", "magnus@example.net")?;

    let by_name = rt.block_on(marketplace.accounts.find_by_username("magnus"))?;
    let by_id = rt.block_on(marketplace.accounts.find_by_id(registered.id().value()))?;
    let missing = rt.block_on(marketplace.accounts.find_by_username("astrid"))?;

    assert_eq!(by_name.as_ref(), Some(&registered));
    assert_eq!(by_id, Some(registered));
    assert!(missing.is_none());
    Ok(())
}

/// Tests that identifiers are handed out in registration order.
#[rstest]
fn assigns_sequential_identifiers(
    runtime: io::Result<Runtime>,
    marketplace: Marketplace,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    let first = register(&rt, &marketplace, "magnus", "magnus@example.net")?;
    let second = register(&rt, &marketplace, "astrid", "astrid@example.net")?;

    assert_eq!(first.id().value(), 1);
    assert_eq!(second.id().value(), 2);
    Ok(())
}

/// Tests that a taken username is rejected through the service layer.
#[rstest]
fn rejects_duplicate_usernames(
    runtime: io::Result<Runtime>,
    marketplace: Marketplace,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let rt = runtime?;
    register(&rt, &marketplace, "magnus", "magnus@example.net")?;

    let result = rt.block_on(
        marketplace
            .accounts
            .register(RegisterAccountRequest::new("magnus", "second@example.net")),
    );

    assert!(matches!(
        result,
        Err(AccountServiceError::Store(AccountStoreError::DuplicateUsername(taken)))
            if taken.as_str() == "magnus"
    ));
    Ok(())
}
