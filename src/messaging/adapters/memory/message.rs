//! In-memory message store for conversation tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::messaging::{
    domain::{ListingRef, Message, MessageDraft, MessageId, ParticipantId},
    ports::{MessageStore, MessageStoreError, MessageStoreResult},
};

/// Thread-safe in-memory message store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryMessageStore {
    state: Arc<RwLock<InMemoryMessageState>>,
}

#[derive(Debug, Default)]
struct InMemoryMessageState {
    messages: HashMap<MessageId, Message>,
    last_id: u64,
}

impl InMemoryMessageStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Checks whether a message was exchanged between the two participants, in
/// either direction.
fn involves(message: &Message, one: &ParticipantId, other: &ParticipantId) -> bool {
    (message.sender() == one && message.receiver() == other)
        || (message.sender() == other && message.receiver() == one)
}

#[async_trait]
impl MessageStore for InMemoryMessageStore {
    async fn insert(&self, draft: &MessageDraft) -> MessageStoreResult<Message> {
        let mut state = self
            .state
            .write()
            .map_err(|err| MessageStoreError::persistence(std::io::Error::other(err.to_string())))?;
        state.last_id = state.last_id.saturating_add(1);
        let message = Message::new(MessageId::new(state.last_id), draft.clone());
        state.messages.insert(message.id(), message.clone());
        Ok(message)
    }

    async fn find_between(
        &self,
        one: &ParticipantId,
        other: &ParticipantId,
        listing: &ListingRef,
    ) -> MessageStoreResult<Vec<Message>> {
        let state = self
            .state
            .read()
            .map_err(|err| MessageStoreError::persistence(std::io::Error::other(err.to_string())))?;
        let mut history: Vec<Message> = state
            .messages
            .values()
            .filter(|message| message.listing() == listing && involves(message, one, other))
            .cloned()
            .collect();
        history.sort_by_key(Message::id);
        Ok(history)
    }

    async fn find_involving(
        &self,
        participant: &ParticipantId,
    ) -> MessageStoreResult<Vec<Message>> {
        let state = self
            .state
            .read()
            .map_err(|err| MessageStoreError::persistence(std::io::Error::other(err.to_string())))?;
        let involving = state
            .messages
            .values()
            .filter(|message| message.sender() == participant || message.receiver() == participant)
            .cloned()
            .collect();
        Ok(involving)
    }
}
