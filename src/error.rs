use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Custom error type for request dispatch
///
/// Anything that reaches the responder without a matching entry in the
/// route table ends up here and is rendered as a JSON error document.
#[derive(Debug)]
pub enum ApiError {
    /// No route registered for this method and path
    RouteNotFound { method: String, path: String },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::RouteNotFound { method, path } => (
                StatusCode::NOT_FOUND,
                format!("Cannot {} {}", method, path),
            ),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}
