//! Identifier newtypes for the catalogue domain.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Store-assigned listing identifier.
///
/// Identifiers increase with insertion order; catalogue pages are served in
/// ascending identifier order, so iterating pages replays publication order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(u64);

impl ListingId {
    /// Creates a listing identifier from a store-assigned value.
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

impl From<u64> for ListingId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
