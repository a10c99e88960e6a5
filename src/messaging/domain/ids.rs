//! Identifier newtypes for the messaging domain.
//!
//! Participants and listings are referenced by opaque identifiers issued
//! elsewhere; messages carry a store-assigned identifier that doubles as
//! the chronological ordering key for conversation history.

use super::MessagingDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned message identifier.
///
/// Identifiers increase monotonically with insertion order, so comparing
/// them is comparing send order. No wall-clock timestamp backs them up.
///
/// # Examples
///
/// ```
/// use carboot::messaging::domain::MessageId;
///
/// let earlier = MessageId::new(3);
/// let later = MessageId::new(7);
/// assert!(earlier < later);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(u64);

impl MessageId {
    /// Creates a message identifier from a store-assigned value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for MessageId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier of a conversation participant.
///
/// The crate never interprets the value beyond equality, except when the
/// inbox attempts a numeric account lookup to resolve a display name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Creates a validated participant identifier.
    ///
    /// # Errors
    ///
    /// Returns [`MessagingDomainError::EmptyParticipantId`] when the value
    /// is empty.
    pub fn new(value: impl Into<String>) -> Result<Self, MessagingDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(MessagingDomainError::EmptyParticipantId);
        }
        Ok(Self(raw))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ParticipantId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reference to the listing a conversation is about.
///
/// Distinct listings keep otherwise identical participant pairs in
/// distinct conversations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingRef(String);

impl ListingRef {
    /// Creates a validated listing reference.
    ///
    /// # Errors
    ///
    /// Returns [`MessagingDomainError::EmptyListingRef`] when the value is
    /// empty.
    pub fn new(value: impl Into<String>) -> Result<Self, MessagingDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(MessagingDomainError::EmptyListingRef);
        }
        Ok(Self(raw))
    }

    /// Returns the reference as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ListingRef {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ListingRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
