//! Unit tests for the messaging module.
//!
//! Tests are organised by layer: domain invariants, store adapters, row
//! conversions, and conversation service behaviour.

mod domain_tests;
