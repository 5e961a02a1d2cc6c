/**
 * Test Application Fixture
 *
 * Builds a fully wired application over an in-memory SQLite database:
 * migrations applied, catalog seeded, router assembled. Each fixture is
 * isolated; nothing touches the filesystem or network.
 *
 * The pool is pinned to a single connection because every in-memory SQLite
 * connection is its own database.
 */

use axum_test::TestServer;
use serde_json::json;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use panelkit::backend::routes::create_router;
use panelkit::backend::seed::seed_catalog;
use panelkit::backend::server::{AppState, ServerSettings};
use panelkit::shared::api::AuthResponse;

pub struct TestApp {
    pub server: TestServer,
    pub pool: SqlitePool,
}

pub fn test_settings() -> ServerSettings {
    ServerSettings {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: "test-secret".to_string(),
        access_token_ttl_secs: 900,
        refresh_token_ttl_secs: 3600,
        port: 0,
    }
}

pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations failed");
    seed_catalog(&pool).await.expect("seeding failed");

    pool
}

/// Build the router and its pool without wrapping them in a test server.
pub async fn build_app() -> (axum::Router, SqlitePool) {
    let pool = test_pool().await;
    let state = AppState::new(pool.clone(), test_settings());
    (create_router(state), pool)
}

/// Build a ready-to-use application instance.
pub async fn spawn_app() -> TestApp {
    let (router, pool) = build_app().await;
    let server = TestServer::new(router).expect("failed to build test server");
    TestApp { server, pool }
}

impl TestApp {
    /// Register a user and return the auth response.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> AuthResponse {
        let response = self
            .server
            .post("/auth/register")
            .json(&json!({
                "name": name,
                "email": email,
                "password": password,
            }))
            .await;
        response.assert_status_ok();
        response.json::<AuthResponse>()
    }
}
