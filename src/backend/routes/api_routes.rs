//! API Route Definitions
//!
//! The full REST surface:
//!
//! - `/auth/*`       - public: login, register, refresh, logout
//! - `/config/user`  - bearer-authenticated: GET (lazy create) + PUT
//! - `/resource/*`   - public: language and theme catalogs

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::handlers::{login, logout, refresh, register};
use crate::backend::config::handlers::{get_user_config, put_user_config};
use crate::backend::middleware::auth::auth_middleware;
use crate::backend::resource::handlers::{
    get_default_theme, get_language, get_theme, list_languages, list_themes,
};
use crate::backend::server::AppState;
use crate::backend::user::handlers::{get_profile, put_password, put_profile};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        .route("/auth/refresh", post(refresh))
        .route("/auth/logout", post(logout))
}

pub fn config_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/config/user", get(get_user_config).put(put_user_config))
        .layer(middleware::from_fn_with_state(state, auth_middleware))
}

pub fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/user/profile", get(get_profile).put(put_profile))
        .route("/user/password", axum::routing::put(put_password))
        .layer(middleware::from_fn_with_state(state, auth_middleware))
}

pub fn resource_routes() -> Router<AppState> {
    Router::new()
        .route("/resource/languages", get(list_languages))
        .route("/resource/languages/{code}", get(get_language))
        .route("/resource/themes", get(list_themes))
        // Literal segment must be registered alongside the capture; axum
        // prefers the literal match.
        .route("/resource/themes/default", get(get_default_theme))
        .route("/resource/themes/{id}", get(get_theme))
}
