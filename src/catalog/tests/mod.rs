//! Unit tests for the catalogue module.
//!
//! Tests are organised by layer: domain invariants, store adapters, row
//! conversions, and the search and publication services.
