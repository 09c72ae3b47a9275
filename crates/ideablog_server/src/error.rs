//! Mapping pipeline failures to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use ideablog_error::{ErrorCategory, IdeaBlogError};
use serde_json::json;

/// Handler error carrying a pipeline failure.
///
/// Rendered as `{"detail": <message>}` with a status chosen by category.
#[derive(Debug, derive_more::From)]
pub struct ApiError(pub IdeaBlogError);

impl ApiError {
    /// HTTP status for this failure.
    pub fn status(&self) -> StatusCode {
        match self.0.category() {
            ErrorCategory::PreconditionViolation => StatusCode::CONFLICT,
            ErrorCategory::MissingSection | ErrorCategory::RemoteCallFailure => {
                StatusCode::BAD_GATEWAY
            }
            ErrorCategory::PersistenceFailure
            | ErrorCategory::ConfigurationFailure
            | ErrorCategory::ServerFailure => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!(status = status.as_u16(), category = %self.0.category(), "{}", self.0);
        (status, Json(json!({ "detail": self.0.message() }))).into_response()
    }
}
