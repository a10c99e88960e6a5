//! Adapter implementations of the catalogue ports.

pub mod fs;
pub mod memory;
pub mod postgres;

pub use fs::FsImageStore;
