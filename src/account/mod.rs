//! Marketplace account management for Carboot.
//!
//! Accounts originate in an external signup flow; this module keeps the
//! lookup surface the messaging and catalogue contexts need: registering an
//! account record and resolving it by username or identifier. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
