use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers;
use crate::models::WillResponse;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "hello-will API",
        version = "1.0.0",
        description = "A static-route HTTP responder"
    ),
    paths(
        handlers::will::will_handler,
        handlers::home::home_handler
    ),
    components(
        schemas(
            WillResponse,
            ErrorResponse
        )
    ),
    tags(
        (name = "static", description = "Fixed responses")
    )
)]
pub struct ApiDoc;
