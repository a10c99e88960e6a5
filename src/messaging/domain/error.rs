//! Error types for messaging domain validation.

use thiserror::Error;

/// Errors returned while constructing messaging domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MessagingDomainError {
    /// The participant identifier is empty.
    #[error("participant identifier must not be empty")]
    EmptyParticipantId,

    /// The listing reference is empty.
    #[error("listing reference must not be empty")]
    EmptyListingRef,
}
