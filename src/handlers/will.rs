use crate::models::WillResponse;
use crate::routes;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// GET /will handler - Fixed JSON greeting
#[utoipa::path(
    get,
    path = routes::WILL,
    responses(
        (status = 200, description = "Greeting", body = WillResponse)
    ),
    tag = "static"
)]
pub fn will_handler() -> Response {
    (
        StatusCode::OK,
        Json(WillResponse {
            response: "Hello World".to_string(),
        }),
    )
        .into_response()
}
