//! Automation repository port: read access to the backing collection.

use std::future::Future;

use autolist_domain::automation::Automation;
use autolist_domain::error::AutolistError;

/// Source of the full [`Automation`] collection.
///
/// Implementations return the *current* collection on every call; callers
/// must not assume two calls observe the same data.
pub trait AutomationRepository {
    /// Load every automation, in storage order.
    fn load_all(&self) -> impl Future<Output = Result<Vec<Automation>, AutolistError>> + Send;
}
