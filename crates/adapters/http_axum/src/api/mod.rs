//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod automations;

use axum::Router;
use axum::routing::get;

use autolist_app::ports::AutomationRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<AUR>() -> Router<AppState<AUR>>
where
    AUR: AutomationRepository + Send + Sync + 'static,
{
    Router::new().route("/automations", get(automations::list::<AUR>))
}
