//! Shared application state for axum handlers.

use std::sync::Arc;

use autolist_app::ports::AutomationRepository;
use autolist_app::services::automation_service::AutomationService;

/// Application state shared across all axum handlers.
///
/// Generic over the automation repository to avoid dynamic dispatch.
/// `Clone` is implemented manually so the repository itself does not need
/// to be `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<AUR> {
    /// Automation list service.
    pub automation_service: Arc<AutomationService<AUR>>,
}

impl<AUR> Clone for AppState<AUR> {
    fn clone(&self) -> Self {
        Self {
            automation_service: Arc::clone(&self.automation_service),
        }
    }
}

impl<AUR> AppState<AUR>
where
    AUR: AutomationRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(automation_service: AutomationService<AUR>) -> Self {
        Self {
            automation_service: Arc::new(automation_service),
        }
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    pub fn from_arc(automation_service: Arc<AutomationService<AUR>>) -> Self {
        Self { automation_service }
    }
}
