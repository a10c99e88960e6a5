//! Port contracts for account persistence.
//!
//! Ports define infrastructure-agnostic interfaces used by account services.

pub mod store;

pub use store::{AccountStore, AccountStoreError, AccountStoreResult};
