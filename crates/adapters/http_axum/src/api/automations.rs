//! JSON REST handlers for automations.

use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};

use autolist_app::ports::AutomationRepository;
use autolist_domain::query::{AutomationQuery, ListPage};

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<ListPage>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// `GET /api/automations`: one page of automations.
///
/// Query string: `page`, `limit` (integer or `all`), `sortBy`, `order`, and
/// any other key as an exact-match filter. Unusable values fall back to
/// their defaults instead of failing the request.
pub async fn list<AUR>(
    State(state): State<AppState<AUR>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<ListResponse, ApiError>
where
    AUR: AutomationRepository + Send + Sync + 'static,
{
    let decoded = AutomationQuery::from_pairs(pairs);
    for rejected in &decoded.rejected {
        tracing::debug!(reason = %rejected, "ignoring query parameter");
    }
    let page = state
        .automation_service
        .list_automations(&decoded.query)
        .await?;
    Ok(ListResponse::Ok(Json(page)))
}
