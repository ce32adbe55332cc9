use crate::handlers::{home_handler, will_handler};
use crate::routes;
use anyhow::{ensure, Result};
use axum::http::Method;
use axum::response::Response;
use std::sync::Arc;

/// Produces the constant response for a matched route
pub type RouteHandler = fn() -> Response;

/// A single (method, exact path) -> response mapping
#[derive(Debug, Clone)]
pub struct Route {
    pub method: Method,
    pub path: &'static str,
    pub handler: RouteHandler,
}

impl Route {
    pub fn get(path: &'static str, handler: RouteHandler) -> Self {
        Route {
            method: Method::GET,
            path,
            handler,
        }
    }

    fn matches(&self, method: &Method, path: &str) -> bool {
        self.method == *method && self.path == path
    }
}

/// Immutable table of routes, built once at startup and matched linearly
///
/// Paths are literal, so there is no parameter extraction and no precedence
/// between entries. Duplicate (method, path) pairs are refused at
/// construction, which keeps lookups independent of registration order.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Result<Self> {
        for (i, route) in routes.iter().enumerate() {
            ensure!(
                !routes[..i].iter().any(|r| r.matches(&route.method, route.path)),
                "duplicate route: {} {}",
                route.method,
                route.path
            );
        }

        Ok(RouteTable { routes })
    }

    /// The routes this service answers in production
    pub fn standard() -> Result<Self> {
        Self::new(vec![
            Route::get(routes::WILL, will_handler),
            Route::get(routes::HOME, home_handler),
        ])
    }

    pub fn lookup(&self, method: &Method, path: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.matches(method, path))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
}

impl AppState {
    pub fn new(routes: RouteTable) -> Self {
        AppState {
            routes: Arc::new(routes),
        }
    }
}
