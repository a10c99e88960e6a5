//! Conversation grouping key and inbox summary records.

use super::{ListingRef, Message, ParticipantId};
use serde::{Deserialize, Serialize};

/// Identity of a conversation: the unordered participant pair plus the
/// listing under discussion.
///
/// The constructor normalises the pair, so the key is independent of which
/// side is named first.
///
/// # Examples
///
/// ```
/// use carboot::messaging::domain::{ConversationKey, ListingRef, MessagingDomainError, ParticipantId};
///
/// # fn main() -> Result<(), MessagingDomainError> {
/// let buyer = ParticipantId::new("17")?;
/// let seller = ParticipantId::new("42")?;
/// let listing = ListingRef::new("ad-9")?;
///
/// let one = ConversationKey::between(buyer.clone(), seller.clone(), listing.clone());
/// let other = ConversationKey::between(seller, buyer, listing);
/// assert_eq!(one, other);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversationKey {
    first: ParticipantId,
    second: ParticipantId,
    listing: ListingRef,
}

impl ConversationKey {
    /// Creates the key for a conversation between two participants about
    /// one listing.
    #[must_use]
    pub fn between(one: ParticipantId, other: ParticipantId, listing: ListingRef) -> Self {
        if other < one {
            Self {
                first: other,
                second: one,
                listing,
            }
        } else {
            Self {
                first: one,
                second: other,
                listing,
            }
        }
    }

    /// Returns the lexicographically smaller participant.
    #[must_use]
    pub const fn first(&self) -> &ParticipantId {
        &self.first
    }

    /// Returns the lexicographically larger participant.
    ///
    /// Equal to [`ConversationKey::first`] for self-conversations.
    #[must_use]
    pub const fn second(&self) -> &ParticipantId {
        &self.second
    }

    /// Returns the listing under discussion.
    #[must_use]
    pub const fn listing(&self) -> &ListingRef {
        &self.listing
    }
}

/// Latest message of one conversation, enriched for inbox display.
///
/// Summaries are recomputed on every inbox query and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationSummary {
    message: Message,
    counterpart: ParticipantId,
    counterpart_name: String,
}

impl ConversationSummary {
    /// Creates a summary from the newest message and resolved counterpart.
    #[must_use]
    pub fn new(
        message: Message,
        counterpart: ParticipantId,
        counterpart_name: impl Into<String>,
    ) -> Self {
        Self {
            message,
            counterpart,
            counterpart_name: counterpart_name.into(),
        }
    }

    /// Returns the newest message of the conversation.
    #[must_use]
    pub const fn message(&self) -> &Message {
        &self.message
    }

    /// Returns the counterpart participant.
    #[must_use]
    pub const fn counterpart(&self) -> &ParticipantId {
        &self.counterpart
    }

    /// Returns the counterpart's display name, or the placeholder when the
    /// name could not be resolved.
    #[must_use]
    pub fn counterpart_name(&self) -> &str {
        &self.counterpart_name
    }
}
