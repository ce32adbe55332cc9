use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::State,
    http::{Method, Uri},
    response::Response,
};

/// Entry point for every request
///
/// Looks the request up in the route table by method and exact path.
/// Headers and body are never read.
pub async fn dispatch_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Result<Response, ApiError> {
    let path = uri.path();

    match state.routes.lookup(&method, path) {
        Some(route) => Ok((route.handler)()),
        None => {
            tracing::debug!("No route for {} {}", method, path);
            Err(ApiError::RouteNotFound {
                method: method.to_string(),
                path: path.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorResponse;
    use crate::handlers::{home_handler, will_handler};
    use crate::models::WillResponse;
    use crate::routes;
    use crate::state::{Route, RouteTable};
    use axum::{body::Body, http::Request, http::StatusCode, Router};
    use tower::ServiceExt;

    fn setup_test_app(table: RouteTable) -> Router {
        Router::new()
            .fallback(dispatch_handler)
            .with_state(AppState::new(table))
    }

    async fn send(app: Router, method: &str, uri: &str) -> (StatusCode, String, Vec<u8>) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let content_type = response
            .headers()
            .get("content-type")
            .map(|v| v.to_str().unwrap().to_string())
            .unwrap_or_default();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, content_type, body.to_vec())
    }

    #[tokio::test]
    async fn test_get_will() {
        let app = setup_test_app(RouteTable::standard().unwrap());

        let (status, content_type, body) = send(app, "GET", "/will").await;

        assert_eq!(status, StatusCode::OK);
        assert!(content_type.contains("json"));
        let response_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json, serde_json::json!({ "response": "Hello World" }));
    }

    #[tokio::test]
    async fn test_get_home() {
        let app = setup_test_app(RouteTable::standard().unwrap());

        let (status, _, body) = send(app, "GET", "/").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"Home Page Working!");
    }

    #[tokio::test]
    async fn test_unknown_path_not_found() {
        let app = setup_test_app(RouteTable::standard().unwrap());

        let (status, content_type, body) = send(app, "GET", "/nonexistent").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(content_type, "application/json");
        let error_response: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error_response.error, "Cannot GET /nonexistent");
    }

    #[tokio::test]
    async fn test_wrong_method_on_registered_path_not_found() {
        let app = setup_test_app(RouteTable::standard().unwrap());

        for method in ["POST", "PUT", "DELETE", "PATCH", "HEAD"] {
            let (status, _, _) = send(app.clone(), method, "/will").await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{} /will", method);
        }

        let (status, _, _) = send(app, "POST", "/").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_query_string_ignored_for_matching() {
        let app = setup_test_app(RouteTable::standard().unwrap());

        let (status, _, body) = send(app, "GET", "/will?name=bob").await;

        assert_eq!(status, StatusCode::OK);
        let response_json: WillResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(response_json.response, "Hello World");
    }

    #[tokio::test]
    async fn test_request_body_ignored() {
        let app = setup_test_app(RouteTable::standard().unwrap());

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/will")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"response":"something else"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], br#"{"response":"Hello World"}"#);
    }

    #[tokio::test]
    async fn test_registration_order_does_not_matter() {
        let will_first = setup_test_app(
            RouteTable::new(vec![
                Route::get(routes::WILL, will_handler),
                Route::get(routes::HOME, home_handler),
            ])
            .unwrap(),
        );
        let home_first = setup_test_app(
            RouteTable::new(vec![
                Route::get(routes::HOME, home_handler),
                Route::get(routes::WILL, will_handler),
            ])
            .unwrap(),
        );

        for (method, uri) in [("GET", "/will"), ("GET", "/"), ("GET", "/nope"), ("POST", "/will")] {
            let a = send(will_first.clone(), method, uri).await;
            let b = send(home_first.clone(), method, uri).await;
            assert_eq!(a, b, "{} {}", method, uri);
        }
    }
}
