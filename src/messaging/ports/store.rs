//! Store port for the append-only message log.

use crate::messaging::domain::{ListingRef, Message, MessageDraft, ParticipantId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for message store operations.
pub type MessageStoreResult<T> = Result<T, MessageStoreError>;

/// Message persistence contract.
///
/// Implementations assign identifiers on insert; identifiers strictly
/// increase in the order messages are accepted.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Appends a message to the log and returns it with its assigned
    /// identifier.
    async fn insert(&self, draft: &MessageDraft) -> MessageStoreResult<Message>;

    /// Returns every message exchanged between the two participants about
    /// the given listing, in ascending identifier order.
    ///
    /// Both directions count: messages from `one` to `other` and from
    /// `other` to `one` belong to the same thread.
    async fn find_between(
        &self,
        one: &ParticipantId,
        other: &ParticipantId,
        listing: &ListingRef,
    ) -> MessageStoreResult<Vec<Message>>;

    /// Returns every message the participant sent or received, in no
    /// particular order.
    async fn find_involving(&self, participant: &ParticipantId)
    -> MessageStoreResult<Vec<Message>>;
}

/// Errors returned by message store implementations.
#[derive(Debug, Clone, Error)]
pub enum MessageStoreError {
    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted message data: {0}")]
    InvalidRow(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl MessageStoreError {
    /// Wraps a data-quality error from persisted rows.
    pub fn invalid_row(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidRow(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
