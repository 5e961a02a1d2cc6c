/**
 * Token Refresh Handler
 *
 * POST /auth/refresh - Exchange a refresh token for a fresh token pair.
 *
 * Tokens rotate: the presented token is consumed atomically, so replaying
 * it (or racing two refreshes) fails with 401. An expired token is also
 * consumed, forcing a re-login.
 */

use axum::{extract::State, Json};

use crate::backend::auth::tokens::{create_access_token, issue_refresh_token, take_refresh_token};
use crate::backend::auth::users::get_user_by_id;
use crate::backend::error::ApiError;
use crate::backend::server::AppState;
use crate::shared::api::{RefreshRequest, TokenResponse};

/// Handle POST /auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(request): Json<RefreshRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let record = take_refresh_token(&state.db, &request.refresh_token)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Refresh attempted with unknown or already-used token");
            ApiError::authentication("Invalid refresh token")
        })?;

    if record.is_expired() {
        tracing::warn!("Refresh attempted with expired token for user {}", record.user_id);
        return Err(ApiError::authentication("Refresh token expired"));
    }

    let user = get_user_by_id(&state.db, record.user_id)
        .await?
        .ok_or_else(|| ApiError::authentication("Invalid refresh token"))?;

    let access_token = create_access_token(
        &state.settings.jwt_secret,
        user.id,
        &user.email,
        &user.role.0,
        state.settings.access_token_ttl_secs,
    )?;
    let replacement =
        issue_refresh_token(&state.db, user.id, state.settings.refresh_token_ttl_secs).await?;

    tracing::info!("Rotated refresh token for user {}", user.id);
    Ok(Json(TokenResponse {
        access_token,
        refresh_token: replacement.token,
        expires_in: state.settings.access_token_ttl_secs,
    }))
}
