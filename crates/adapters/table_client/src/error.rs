//! Client error types.

use std::path::PathBuf;

/// Errors from fetching a page of automations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request could not be sent or the body could not be decoded.
    #[error("request failed")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },
}

/// Errors from writing the persisted preference file.
#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("failed to access preference file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid preference data")]
    Json(#[from] serde_json::Error),
}
