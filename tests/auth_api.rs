//! Authentication endpoint tests: registration, login, refresh rotation,
//! and logout.

mod common;

use common::spawn_app;
use serde_json::json;

use panelkit::shared::api::{AuthResponse, TokenResponse};

#[tokio::test]
async fn register_returns_session_and_config() {
    let app = spawn_app().await;

    let auth = app.register("Alice", "alice@example.com", "password123").await;
    assert_eq!(auth.user.email, "alice@example.com");
    assert_eq!(auth.user.role, vec!["user".to_string()]);
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
    // The lazily created configuration ships with the response: only the
    // enabled catalog modules, in catalog order.
    let ids: Vec<&str> = auth
        .user_config
        .modules
        .iter()
        .map(|m| m.id.as_str())
        .collect();
    assert_eq!(ids, vec!["home", "dashboard", "profile"]);
}

#[tokio::test]
async fn register_rejects_duplicate_email() {
    let app = spawn_app().await;
    app.register("Alice", "alice@example.com", "password123").await;

    let response = app
        .server
        .post("/auth/register")
        .json(&json!({
            "name": "Imposter",
            "email": "alice@example.com",
            "password": "password456",
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CONFLICT);
}

#[tokio::test]
async fn register_validates_input() {
    let app = spawn_app().await;

    for body in [
        json!({ "name": "", "email": "a@b.c", "password": "password123" }),
        json!({ "name": "Alice", "email": "no-at-sign", "password": "password123" }),
        json!({ "name": "Alice", "email": "a@b.c", "password": "short" }),
    ] {
        let response = app.server.post("/auth/register").json(&body).await;
        response.assert_status_bad_request();
    }
}

#[tokio::test]
async fn login_succeeds_with_valid_credentials() {
    let app = spawn_app().await;
    app.register("Alice", "alice@example.com", "password123").await;

    let response = app
        .server
        .post("/auth/login")
        .json(&json!({ "email": "alice@example.com", "password": "password123" }))
        .await;
    response.assert_status_ok();
    let auth = response.json::<AuthResponse>();
    assert_eq!(auth.user.email, "alice@example.com");
}

#[tokio::test]
async fn login_rejects_bad_credentials_uniformly() {
    let app = spawn_app().await;
    app.register("Alice", "alice@example.com", "password123").await;

    // Wrong password and unknown email produce the same 401 message.
    let wrong_password = app
        .server
        .post("/auth/login")
        .json(&json!({ "email": "alice@example.com", "password": "wrong-password" }))
        .await;
    wrong_password.assert_status_unauthorized();

    let unknown_email = app
        .server
        .post("/auth/login")
        .json(&json!({ "email": "nobody@example.com", "password": "password123" }))
        .await;
    unknown_email.assert_status_unauthorized();

    let a = wrong_password.json::<serde_json::Value>();
    let b = unknown_email.json::<serde_json::Value>();
    assert_eq!(a["error"], b["error"]);
}

#[tokio::test]
async fn refresh_rotates_and_is_single_use() {
    let app = spawn_app().await;
    let auth = app.register("Alice", "alice@example.com", "password123").await;

    let response = app
        .server
        .post("/auth/refresh")
        .json(&json!({ "refreshToken": auth.refresh_token }))
        .await;
    response.assert_status_ok();
    let rotated = response.json::<TokenResponse>();
    assert_ne!(rotated.refresh_token, auth.refresh_token);

    // The consumed token no longer works.
    let replay = app
        .server
        .post("/auth/refresh")
        .json(&json!({ "refreshToken": auth.refresh_token }))
        .await;
    replay.assert_status_unauthorized();

    // The replacement does.
    let again = app
        .server
        .post("/auth/refresh")
        .json(&json!({ "refreshToken": rotated.refresh_token }))
        .await;
    again.assert_status_ok();
}

#[tokio::test]
async fn refresh_rejects_expired_token() {
    let app = spawn_app().await;
    let auth = app.register("Alice", "alice@example.com", "password123").await;

    sqlx::query("UPDATE refresh_tokens SET expires_at = ? WHERE token = ?")
        .bind(chrono::Utc::now() - chrono::Duration::hours(1))
        .bind(&auth.refresh_token)
        .execute(&app.pool)
        .await
        .unwrap();

    let response = app
        .server
        .post("/auth/refresh")
        .json(&json!({ "refreshToken": auth.refresh_token }))
        .await;
    response.assert_status_unauthorized();

    // The expired token was consumed on the attempt: a second try fails
    // the same way rather than being found again.
    let replay = app
        .server
        .post("/auth/refresh")
        .json(&json!({ "refreshToken": auth.refresh_token }))
        .await;
    replay.assert_status_unauthorized();
}

#[tokio::test]
async fn logout_invalidates_refresh_token() {
    let app = spawn_app().await;
    let auth = app.register("Alice", "alice@example.com", "password123").await;

    let response = app
        .server
        .post("/auth/logout")
        .json(&json!({ "refreshToken": auth.refresh_token }))
        .await;
    response.assert_status(axum::http::StatusCode::NO_CONTENT);

    let refresh = app
        .server
        .post("/auth/refresh")
        .json(&json!({ "refreshToken": auth.refresh_token }))
        .await;
    refresh.assert_status_unauthorized();

    // Logging out again is still a 204.
    let repeat = app
        .server
        .post("/auth/logout")
        .json(&json!({ "refreshToken": auth.refresh_token }))
        .await;
    repeat.assert_status(axum::http::StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn config_routes_require_bearer_token() {
    let app = spawn_app().await;

    let missing = app.server.get("/config/user").await;
    missing.assert_status_unauthorized();

    let malformed = app
        .server
        .get("/config/user")
        .authorization("Token abc")
        .await;
    malformed.assert_status_unauthorized();

    let garbage = app
        .server
        .get("/config/user")
        .authorization("Bearer not.a.jwt")
        .await;
    garbage.assert_status_unauthorized();
}
