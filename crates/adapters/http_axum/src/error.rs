//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use autolist_domain::error::AutolistError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

/// Maps [`AutolistError`] to an HTTP response with appropriate status code.
pub struct ApiError(AutolistError);

impl From<AutolistError> for ApiError {
    fn from(err: AutolistError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            AutolistError::DataAccess(source) => {
                tracing::error!(error = %source, "data access failure");
                (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string())
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}
