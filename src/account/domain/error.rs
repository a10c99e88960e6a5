//! Error types for account domain validation.

use thiserror::Error;

/// Errors returned while constructing account domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountDomainError {
    /// The username is empty.
    #[error("username must not be empty")]
    EmptyUsername,
}
