use crate::routes;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub const HOME_BODY: &str = "Home Page Working!";

/// GET / handler - Plain text liveness page
#[utoipa::path(
    get,
    path = routes::HOME,
    responses(
        (status = 200, description = "Home page", body = String, content_type = "text/plain")
    ),
    tag = "static"
)]
pub fn home_handler() -> Response {
    (StatusCode::OK, HOME_BODY).into_response()
}
