use crate::api_doc::ApiDoc;
use crate::handlers::dispatch_handler;
use crate::routes;
use crate::state::AppState;
use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Build the HTTP router
///
/// Every request is handed to the route table through the fallback, so
/// anything the table does not know about gets its 404. The docs routes are
/// only mounted when `api_docs` is set.
pub fn build_router(state: AppState, api_docs: bool) -> Router {
    let mut router: Router<AppState> = Router::new().fallback(dispatch_handler);

    if api_docs {
        router = router.merge(
            SwaggerUi::new(routes::SWAGGER_UI).url(routes::OPENAPI_JSON, ApiDoc::openapi()),
        );
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}
