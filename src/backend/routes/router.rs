/**
 * Router Assembly
 *
 * Merges the route groups, attaches tracing, and installs the fallback.
 */

use axum::{http::StatusCode, Router};
use tower_http::trace::TraceLayer;

use super::api_routes::{auth_routes, config_routes, resource_routes, user_routes};
use crate::backend::server::AppState;

/// Build the application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(auth_routes())
        .merge(config_routes(state.clone()))
        .merge(user_routes(state.clone()))
        .merge(resource_routes())
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 Not Found")
}
