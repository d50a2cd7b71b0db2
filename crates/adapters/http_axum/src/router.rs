//! Axum router assembly.

use axum::Router;
use axum::http::header::InvalidHeaderValue;
use axum::http::{HeaderValue, Method};
use axum::routing::get;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use autolist_app::ports::AutomationRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api` and exposes `/health`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<AUR>(state: AppState<AUR>) -> Router
where
    AUR: AutomationRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS policy letting a browser table served from `origin` call the API.
///
/// `*` allows any origin.
///
/// # Errors
///
/// Returns [`InvalidHeaderValue`] when `origin` is not a valid header value.
pub fn cors(origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    let allow_origin = if origin == "*" {
        AllowOrigin::any()
    } else {
        AllowOrigin::exact(HeaderValue::from_str(origin)?)
    };
    Ok(CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_origin(allow_origin))
}

async fn health_check() -> &'static str {
    "OK"
}
