//! JSON file implementation of [`AutomationRepository`].

use std::path::{Path, PathBuf};

use autolist_app::ports::AutomationRepository;
use autolist_domain::automation::Automation;
use autolist_domain::error::AutolistError;

use crate::error::StorageError;

/// Automation repository backed by a JSON array on disk.
///
/// Nothing is cached: each [`load_all`](AutomationRepository::load_all)
/// re-reads and re-parses the file.
#[derive(Debug, Clone)]
pub struct JsonAutomationRepository {
    path: PathBuf,
}

impl JsonAutomationRepository {
    /// Create a repository reading from `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the data file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<Vec<Automation>, StorageError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| StorageError::Io {
                path: self.path.clone(),
                source,
            })?;
        serde_json::from_slice(&bytes).map_err(|source| StorageError::Json {
            path: self.path.clone(),
            source,
        })
    }
}

impl AutomationRepository for JsonAutomationRepository {
    async fn load_all(&self) -> Result<Vec<Automation>, AutolistError> {
        Ok(self.read().await?)
    }
}
