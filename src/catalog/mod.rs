//! Listing catalogue for Carboot.
//!
//! Listings are published once and then browsed through paged catalogue
//! views. Search applies optional, conjunctive filters over the same paging
//! machinery; a request with no active filter serves the plain catalogue
//! page. The module follows hexagonal architecture:
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
