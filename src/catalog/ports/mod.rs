//! Ports exposed by the catalogue context.

pub mod images;
pub mod store;

pub use images::{ImageStore, ImageStoreError, ImageStoreResult};
pub use store::{ListingStore, ListingStoreError, ListingStoreResult};
