//! Runtime storage settings.

use serde::{Deserialize, Serialize};

/// Storage settings shared by the `PostgreSQL` and filesystem adapters.
///
/// Every field has a default suitable for local development, so a partial
/// JSON document configures only what it names.
///
/// # Examples
///
/// ```
/// use carboot::config::StorageSettings;
///
/// let settings = StorageSettings::from_json(r#"{"upload_dir": "img"}"#)?;
/// assert_eq!(settings.upload_dir, "img");
/// assert_eq!(settings.image_prefix, "/uploads");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// `PostgreSQL` connection URL.
    #[serde(default = "default_database_url")]
    pub database_url: String,
    /// Directory listing images are written into.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
    /// URL path prefix stored image paths start with.
    #[serde(default = "default_image_prefix")]
    pub image_prefix: String,
}

impl StorageSettings {
    /// Parses settings from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json` error when the document is malformed.
    pub fn from_json(document: &str) -> serde_json::Result<Self> {
        serde_json::from_str(document)
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            upload_dir: default_upload_dir(),
            image_prefix: default_image_prefix(),
        }
    }
}

fn default_database_url() -> String {
    "postgres://localhost/carboot".to_owned()
}

fn default_upload_dir() -> String {
    "uploads".to_owned()
}

fn default_image_prefix() -> String {
    "/uploads".to_owned()
}
