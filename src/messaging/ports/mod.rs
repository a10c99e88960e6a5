//! Ports exposed by the messaging context.

pub mod store;

pub use store::{MessageStore, MessageStoreError, MessageStoreResult};
