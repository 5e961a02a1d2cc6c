/**
 * Application State Management
 *
 * This module defines the application state structure and implements the
 * `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the central state container: the database pool and the
 * immutable server settings. The static default configuration is process-wide
 * and loaded lazily via `shared::DefaultConfig::builtin()`, so it does not
 * live here.
 *
 * # Thread Safety
 *
 * `SqlitePool` is internally reference-counted; `ServerSettings` is wrapped
 * in `Arc` so cloning the state is cheap.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use super::config::ServerSettings;

/// Shared application state passed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
    /// Immutable runtime settings (secrets, TTLs)
    pub settings: Arc<ServerSettings>,
}

impl AppState {
    pub fn new(db: SqlitePool, settings: ServerSettings) -> Self {
        Self {
            db,
            settings: Arc::new(settings),
        }
    }
}

/// Allow handlers that only touch the database to take `State<SqlitePool>`.
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db.clone()
    }
}

/// Allow handlers that only need settings to take `State<Arc<ServerSettings>>`.
impl FromRef<AppState> for Arc<ServerSettings> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.settings.clone()
    }
}
