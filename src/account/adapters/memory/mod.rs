//! In-memory adapters for account ports.

mod account;

pub use account::InMemoryAccountStore;
