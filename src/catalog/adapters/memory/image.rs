//! In-memory image store for publication tests.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::catalog::ports::{ImageStore, ImageStoreError, ImageStoreResult};

/// Thread-safe in-memory image store.
///
/// Hands out the public paths a filesystem store would, without touching
/// the filesystem.
#[derive(Debug, Clone, Default)]
pub struct InMemoryImageStore {
    images: Arc<RwLock<Vec<Vec<u8>>>>,
}

impl InMemoryImageStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many images have been stored.
    ///
    /// # Errors
    ///
    /// Returns [`ImageStoreError::Storage`] when the store lock is poisoned.
    pub fn stored_count(&self) -> ImageStoreResult<usize> {
        let images = self
            .images
            .read()
            .map_err(|err| ImageStoreError::storage(std::io::Error::other(err.to_string())))?;
        Ok(images.len())
    }
}

#[async_trait]
impl ImageStore for InMemoryImageStore {
    async fn store_image(&self, bytes: &[u8]) -> ImageStoreResult<String> {
        let mut images = self
            .images
            .write()
            .map_err(|err| ImageStoreError::storage(std::io::Error::other(err.to_string())))?;
        images.push(bytes.to_vec());
        Ok(format!("/uploads/image_{}.jpg", images.len()))
    }
}
