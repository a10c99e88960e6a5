//! Buyer-seller messaging for Carboot.
//!
//! Messages live in one flat append-only log keyed by participant pair and
//! listing. Two views are derived from that log on demand: the full thread
//! of one conversation in posting order, and the inbox of a participant
//! holding the newest message of each conversation they take part in. The
//! module follows hexagonal architecture:
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
