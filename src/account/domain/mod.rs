//! Domain model for marketplace accounts.
//!
//! Accounts exist here as a lookup surface for the messaging and catalogue
//! contexts; signup flows and credentials stay outside the domain boundary.

mod account;
mod error;
mod ids;

pub use account::{Account, AccountDraft};
pub use error::AccountDomainError;
pub use ids::{UserId, Username};
