//! Filesystem image store backed by a capability-scoped directory.

use async_trait::async_trait;
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use mockable::Clock;
use std::path::Path;
use std::sync::Arc;

use crate::catalog::ports::{ImageStore, ImageStoreError, ImageStoreResult};

/// Image store writing uploads into one directory.
///
/// The directory handle is capability-scoped, so the store can only touch
/// files below the directory it was opened on. File names derive from the
/// injected clock.
pub struct FsImageStore<C>
where
    C: Clock + Send + Sync,
{
    uploads: Dir,
    public_prefix: String,
    clock: Arc<C>,
}

impl<C> FsImageStore<C>
where
    C: Clock + Send + Sync,
{
    /// Opens the upload directory and creates the store.
    ///
    /// Returned public paths start with `public_prefix`.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the upload directory cannot be opened.
    pub fn open(
        upload_dir: impl AsRef<Path>,
        public_prefix: impl Into<String>,
        clock: Arc<C>,
    ) -> std::io::Result<Self> {
        let uploads = Dir::open_ambient_dir(upload_dir, ambient_authority())?;
        Ok(Self {
            uploads,
            public_prefix: public_prefix.into(),
            clock,
        })
    }
}

#[async_trait]
impl<C> ImageStore for FsImageStore<C>
where
    C: Clock + Send + Sync,
{
    async fn store_image(&self, bytes: &[u8]) -> ImageStoreResult<String> {
        let file_name = format!("listing_{}.jpg", self.clock.utc().timestamp_millis());
        self.uploads
            .write(&file_name, bytes)
            .map_err(ImageStoreError::storage)?;
        tracing::info!("stored listing image {}", file_name);
        Ok(format!("{}/{file_name}", self.public_prefix))
    }
}
