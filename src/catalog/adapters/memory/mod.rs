//! In-memory adapters for the catalogue context.

mod image;
mod listing;

pub use image::InMemoryImageStore;
pub use listing::InMemoryListingStore;
