//! Storage-specific error type wrapping IO and JSON failures.

use std::path::PathBuf;

use autolist_domain::error::AutolistError;

/// Errors originating from the JSON file storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The data file could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file is not a JSON array of automations.
    #[error("failed to parse {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<StorageError> for AutolistError {
    fn from(err: StorageError) -> Self {
        Self::DataAccess(Box::new(err))
    }
}
