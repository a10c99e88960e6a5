//! Catalogue domain validation errors.

use thiserror::Error;

/// Validation errors raised by catalogue domain constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogDomainError {
    /// A page request asked for zero items per page.
    #[error("page size must be at least one")]
    InvalidPageSize,
}
