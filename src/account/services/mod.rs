//! Application services for account management.

mod directory;

pub use directory::{
    AccountService, AccountServiceError, AccountServiceResult, RegisterAccountRequest,
};
