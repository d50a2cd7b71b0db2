//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`AutolistError`] via `From` when it crosses a port boundary.

/// Fatal errors surfaced by the query path.
#[derive(Debug, thiserror::Error)]
pub enum AutolistError {
    /// The backing collection could not be read or parsed.
    #[error("failed to access automation data")]
    DataAccess(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A query parameter that could not be interpreted.
///
/// These are never fatal: decoders fall back to the documented default
/// and report the rejected value so callers can log it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidParameter {
    #[error("page must be an integer, got {0:?}")]
    Page(String),

    #[error("limit must be a positive integer or \"all\", got {0:?}")]
    Limit(String),

    #[error("unknown sort field {0:?}")]
    SortField(String),

    #[error("order must be \"asc\" or \"desc\", got {0:?}")]
    Order(String),
}
