//! Unit tests for the account module.
