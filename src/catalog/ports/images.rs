//! Storage port for listing images.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for image store operations.
pub type ImageStoreResult<T> = Result<T, ImageStoreError>;

/// Image persistence contract.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persists the image bytes and returns the public path the stored
    /// image is served from.
    async fn store_image(&self, bytes: &[u8]) -> ImageStoreResult<String>;
}

/// Errors returned by image store implementations.
#[derive(Debug, Clone, Error)]
pub enum ImageStoreError {
    /// The image bytes could not be written.
    #[error("image storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl ImageStoreError {
    /// Wraps an image storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
