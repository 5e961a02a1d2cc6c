/**
 * Login Handler
 *
 * POST /auth/login - Verify credentials and issue a session.
 *
 * Failures never reveal whether the email exists: bad email and bad
 * password both produce the same 401.
 */

use axum::{extract::State, Json};

use super::issue_session;
use crate::backend::auth::users::get_user_by_email;
use crate::backend::config::get_or_create_config;
use crate::backend::error::ApiError;
use crate::backend::server::AppState;
use crate::shared::api::{AuthResponse, LoginRequest};

/// Handle POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let user = get_user_by_email(&state.db, &request.email)
        .await?
        .ok_or_else(|| ApiError::authentication("Invalid email or password"))?;

    let password_ok = bcrypt::verify(&request.password, &user.password_hash)
        .map_err(|err| ApiError::internal(format!("Password verification failed: {}", err)))?;
    if !password_ok {
        tracing::warn!("Failed login attempt for {}", request.email);
        return Err(ApiError::authentication("Invalid email or password"));
    }

    let remember = request.remember.unwrap_or(false);
    let (access_token, refresh_token) =
        issue_session(&state.db, &state.settings, &user, remember).await?;

    let config = get_or_create_config(&state.db, user.id).await?;

    tracing::info!("User {} logged in", user.id);
    Ok(Json(AuthResponse {
        user: user.into(),
        access_token,
        refresh_token,
        expires_in: state.settings.access_token_ttl_secs,
        user_config: config.config.0,
    }))
}
