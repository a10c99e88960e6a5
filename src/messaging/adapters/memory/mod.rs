//! In-memory adapters for the messaging context.

mod message;

pub use message::InMemoryMessageStore;
