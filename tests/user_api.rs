//! User profile endpoint tests: profile fetch, field-wise updates, and
//! password changes.

mod common;

use common::spawn_app;
use serde_json::json;

use panelkit::shared::config::User;

#[tokio::test]
async fn profile_returns_own_account() {
    let app = spawn_app().await;
    let auth = app.register("Alice", "alice@example.com", "password123").await;

    let response = app
        .server
        .get("/user/profile")
        .authorization_bearer(&auth.access_token)
        .await;
    response.assert_status_ok();
    let profile = response.json::<User>();
    assert_eq!(profile.id, auth.user.id);
    assert_eq!(profile.email, "alice@example.com");
    assert_eq!(profile.avatar, None);
}

#[tokio::test]
async fn profile_routes_require_bearer_token() {
    let app = spawn_app().await;

    app.server.get("/user/profile").await.assert_status_unauthorized();
    app.server
        .put("/user/password")
        .json(&json!({ "password": "password456" }))
        .await
        .assert_status_unauthorized();
}

#[tokio::test]
async fn profile_update_is_field_wise() {
    let app = spawn_app().await;
    let auth = app.register("Alice", "alice@example.com", "password123").await;

    let response = app
        .server
        .put("/user/profile")
        .authorization_bearer(&auth.access_token)
        .json(&json!({ "avatar": "/avatars/alice.png" }))
        .await;
    response.assert_status_ok();
    let updated = response.json::<User>();
    // Untouched fields survive.
    assert_eq!(updated.name, "Alice");
    assert_eq!(updated.avatar.as_deref(), Some("/avatars/alice.png"));

    let renamed = app
        .server
        .put("/user/profile")
        .authorization_bearer(&auth.access_token)
        .json(&json!({ "name": "  Alice Liddell  " }))
        .await
        .json::<User>();
    assert_eq!(renamed.name, "Alice Liddell");
    assert_eq!(renamed.avatar.as_deref(), Some("/avatars/alice.png"));

    // Email is not an updatable profile field; sending it changes nothing.
    let unchanged = app
        .server
        .put("/user/profile")
        .authorization_bearer(&auth.access_token)
        .json(&json!({ "email": "evil@example.com" }))
        .await
        .json::<User>();
    assert_eq!(unchanged.email, "alice@example.com");
}

#[tokio::test]
async fn profile_update_rejects_blank_name() {
    let app = spawn_app().await;
    let auth = app.register("Alice", "alice@example.com", "password123").await;

    let response = app
        .server
        .put("/user/profile")
        .authorization_bearer(&auth.access_token)
        .json(&json!({ "name": "   " }))
        .await;
    response.assert_status_bad_request();
}

#[tokio::test]
async fn password_change_takes_effect_and_revokes_sessions() {
    let app = spawn_app().await;
    let auth = app.register("Alice", "alice@example.com", "password123").await;

    let response = app
        .server
        .put("/user/password")
        .authorization_bearer(&auth.access_token)
        .json(&json!({ "password": "new-password-456" }))
        .await;
    response.assert_status(axum::http::StatusCode::NO_CONTENT);

    // The old password stops working, the new one logs in.
    app.server
        .post("/auth/login")
        .json(&json!({ "email": "alice@example.com", "password": "password123" }))
        .await
        .assert_status_unauthorized();
    app.server
        .post("/auth/login")
        .json(&json!({ "email": "alice@example.com", "password": "new-password-456" }))
        .await
        .assert_status_ok();

    // Refresh tokens issued before the change are revoked.
    app.server
        .post("/auth/refresh")
        .json(&json!({ "refreshToken": auth.refresh_token }))
        .await
        .assert_status_unauthorized();
}

#[tokio::test]
async fn password_change_validates_length() {
    let app = spawn_app().await;
    let auth = app.register("Alice", "alice@example.com", "password123").await;

    let response = app
        .server
        .put("/user/password")
        .authorization_bearer(&auth.access_token)
        .json(&json!({ "password": "short" }))
        .await;
    response.assert_status_bad_request();
}
