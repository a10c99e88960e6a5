//! Service layer for posting messages, thread resolution, and inbox
//! aggregation.

use crate::account::{domain::UserId, ports::AccountStore};
use crate::messaging::{
    domain::{
        ConversationKey, ConversationSummary, ListingRef, Message, MessageDraft,
        MessagingDomainError, ParticipantId,
    },
    ports::{MessageStore, MessageStoreError},
};
use std::cmp::Reverse;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for posting a message to a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostMessageRequest {
    sender: String,
    receiver: String,
    listing: String,
    body: String,
}

impl PostMessageRequest {
    /// Creates a request with the sender, receiver, listing, and body.
    #[must_use]
    pub fn new(
        sender: impl Into<String>,
        receiver: impl Into<String>,
        listing: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            receiver: receiver.into(),
            listing: listing.into(),
            body: body.into(),
        }
    }
}

/// Request payload for resolving one conversation thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadRequest {
    one: String,
    other: String,
    listing: String,
}

impl ThreadRequest {
    /// Creates a request naming either participant first.
    #[must_use]
    pub fn new(one: impl Into<String>, other: impl Into<String>, listing: impl Into<String>) -> Self {
        Self {
            one: one.into(),
            other: other.into(),
            listing: listing.into(),
        }
    }
}

/// Service-level errors for conversation operations.
#[derive(Debug, Error)]
pub enum ConversationError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] MessagingDomainError),
    /// Message store operation failed.
    #[error(transparent)]
    Store(#[from] MessageStoreError),
}

/// Result type for conversation service operations.
pub type ConversationResult<T> = Result<T, ConversationError>;

/// Conversation orchestration service.
///
/// Holds the message log and the account directory; the directory is only
/// consulted to enrich inbox summaries and never gates an operation.
#[derive(Clone)]
pub struct ConversationService<S, D>
where
    S: MessageStore,
    D: AccountStore,
{
    messages: Arc<S>,
    directory: Arc<D>,
}

impl<S, D> ConversationService<S, D>
where
    S: MessageStore,
    D: AccountStore,
{
    /// Creates a new conversation service.
    #[must_use]
    pub const fn new(messages: Arc<S>, directory: Arc<D>) -> Self {
        Self {
            messages,
            directory,
        }
    }

    /// Posts a message and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ConversationError`] when a participant or listing reference
    /// is empty, or when the store rejects the append.
    pub async fn post_message(&self, request: PostMessageRequest) -> ConversationResult<Message> {
        let sender = ParticipantId::new(request.sender)?;
        let receiver = ParticipantId::new(request.receiver)?;
        let listing = ListingRef::new(request.listing)?;
        let draft = MessageDraft::new(sender, receiver, listing, request.body);
        Ok(self.messages.insert(&draft).await?)
    }

    /// Resolves the full conversation thread between two participants about
    /// one listing, oldest first.
    ///
    /// The thread is symmetric: either participant may be named first and
    /// messages in both directions are returned.
    ///
    /// # Errors
    ///
    /// Returns [`ConversationError`] when a participant or listing reference
    /// is empty, or when the store lookup fails.
    pub async fn thread(&self, request: ThreadRequest) -> ConversationResult<Vec<Message>> {
        let one = ParticipantId::new(request.one)?;
        let other = ParticipantId::new(request.other)?;
        let listing = ListingRef::new(request.listing)?;
        Ok(self.messages.find_between(&one, &other, &listing).await?)
    }

    /// Aggregates the participant's inbox: the newest message of every
    /// conversation they take part in, newest conversation first, enriched
    /// with the counterpart's display name.
    ///
    /// Directory failures never surface here; affected summaries fall back
    /// to the `User {id}` placeholder.
    ///
    /// # Errors
    ///
    /// Returns [`ConversationError`] when the participant reference is empty
    /// or the message store lookup fails.
    pub async fn inbox(&self, participant: &str) -> ConversationResult<Vec<ConversationSummary>> {
        let user = ParticipantId::new(participant)?;
        let involving = self.messages.find_involving(&user).await?;

        let mut newest_by_conversation: HashMap<ConversationKey, Message> = HashMap::new();
        for message in involving {
            match newest_by_conversation.entry(message.conversation_key()) {
                Entry::Occupied(mut slot) => {
                    if message.id() > slot.get().id() {
                        slot.insert(message);
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(message);
                }
            }
        }

        let mut newest: Vec<Message> = newest_by_conversation.into_values().collect();
        newest.sort_by_key(|message| Reverse(message.id()));

        let mut summaries = Vec::with_capacity(newest.len());
        for message in newest {
            let counterpart = message.counterpart(&user).clone();
            let counterpart_name = self.display_name(&counterpart).await;
            summaries.push(ConversationSummary::new(message, counterpart, counterpart_name));
        }
        tracing::debug!(
            "aggregated {} inbox conversations for participant {}",
            summaries.len(),
            user
        );
        Ok(summaries)
    }

    /// Resolves a counterpart's display name from the account directory.
    ///
    /// Falls back to the `User {id}` placeholder when the reference is not
    /// numeric, the account is unknown, or the directory fails.
    async fn display_name(&self, counterpart: &ParticipantId) -> String {
        let placeholder = format!("User {counterpart}");
        let Ok(account_id) = counterpart.as_str().parse::<u64>() else {
            return placeholder;
        };
        match self.directory.find_by_id(UserId::new(account_id)).await {
            Ok(Some(account)) => account.username().to_string(),
            Ok(None) => placeholder,
            Err(err) => {
                tracing::warn!("display name lookup for {} failed: {}", counterpart, err);
                placeholder
            }
        }
    }
}
