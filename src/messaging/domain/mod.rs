//! Messaging domain model.
//!
//! Messages form a flat append-only log. Conversation threads and inbox
//! summaries are views derived from that log; ordering relies on the
//! store-assigned message identifiers alone.

mod conversation;
mod error;
mod ids;
mod message;

pub use conversation::{ConversationKey, ConversationSummary};
pub use error::MessagingDomainError;
pub use ids::{ListingRef, MessageId, ParticipantId};
pub use message::{Message, MessageDraft};
