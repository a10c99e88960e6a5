//! Carboot: classifieds marketplace core.
//!
//! This crate provides the backend core of a classifieds marketplace:
//! buyer-seller messaging with conversation aggregation, a filterable
//! listing catalogue, and the account directory both lean on.
//!
//! # Architecture
//!
//! Carboot follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, filesystem, memory)
//!
//! # Modules
//!
//! - [`account`]: Account registration and lookup
//! - [`catalog`]: Listing publication and filtered catalogue search
//! - [`config`]: Storage wiring settings
//! - [`messaging`]: Buyer-seller conversations and the aggregated inbox

pub mod account;
pub mod catalog;
pub mod config;
pub mod messaging;
