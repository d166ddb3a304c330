//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use scenehub_domain::error::SceneHubError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`SceneHubError`] to an HTTP response with appropriate status code.
pub struct ApiError(SceneHubError);

impl From<SceneHubError> for ApiError {
    fn from(err: SceneHubError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            SceneHubError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            SceneHubError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            SceneHubError::Cloud(err) => {
                tracing::error!(error = ?err, "cloud error");
                (StatusCode::BAD_GATEWAY, err.to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
