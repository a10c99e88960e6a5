//! Message record and its draft form.

use super::{ConversationKey, ListingRef, MessageId, ParticipantId};
use serde::{Deserialize, Serialize};

/// Immutable directed message between two marketplace participants.
///
/// Messages are append-only: once stored they are never edited or deleted,
/// and the store-assigned identifier fixes their position in conversation
/// history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    id: MessageId,
    sender: ParticipantId,
    receiver: ParticipantId,
    listing: ListingRef,
    body: String,
}

impl Message {
    /// Creates a message from a store-assigned identifier and draft data.
    #[must_use]
    pub fn new(id: MessageId, draft: MessageDraft) -> Self {
        let MessageDraft {
            sender,
            receiver,
            listing,
            body,
        } = draft;
        Self {
            id,
            sender,
            receiver,
            listing,
            body,
        }
    }

    /// Returns the store-assigned identifier.
    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    /// Returns the sending participant.
    #[must_use]
    pub const fn sender(&self) -> &ParticipantId {
        &self.sender
    }

    /// Returns the receiving participant.
    #[must_use]
    pub const fn receiver(&self) -> &ParticipantId {
        &self.receiver
    }

    /// Returns the listing the message is about.
    #[must_use]
    pub const fn listing(&self) -> &ListingRef {
        &self.listing
    }

    /// Returns the body exactly as submitted.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Returns the key of the conversation this message belongs to.
    #[must_use]
    pub fn conversation_key(&self) -> ConversationKey {
        ConversationKey::between(
            self.sender.clone(),
            self.receiver.clone(),
            self.listing.clone(),
        )
    }

    /// Returns the other participant from `participant`'s point of view.
    ///
    /// Self-addressed messages have the same participant on both sides, so
    /// the counterpart is the participant itself.
    #[must_use]
    pub fn counterpart(&self, participant: &ParticipantId) -> &ParticipantId {
        if self.sender == *participant {
            &self.receiver
        } else {
            &self.sender
        }
    }
}

/// Pre-insert message data; the store assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDraft {
    sender: ParticipantId,
    receiver: ParticipantId,
    listing: ListingRef,
    body: String,
}

impl MessageDraft {
    /// Creates a draft from validated participant and listing references.
    ///
    /// The body is stored verbatim; empty bodies are legal.
    #[must_use]
    pub fn new(
        sender: ParticipantId,
        receiver: ParticipantId,
        listing: ListingRef,
        body: impl Into<String>,
    ) -> Self {
        Self {
            sender,
            receiver,
            listing,
            body: body.into(),
        }
    }

    /// Returns the sending participant.
    #[must_use]
    pub const fn sender(&self) -> &ParticipantId {
        &self.sender
    }

    /// Returns the receiving participant.
    #[must_use]
    pub const fn receiver(&self) -> &ParticipantId {
        &self.receiver
    }

    /// Returns the listing the message is about.
    #[must_use]
    pub const fn listing(&self) -> &ListingRef {
        &self.listing
    }

    /// Returns the body exactly as submitted.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }
}
