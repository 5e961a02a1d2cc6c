/**
 * Logout Handler
 *
 * POST /auth/logout - Invalidate a refresh token.
 *
 * Idempotent: logging out an unknown or already-consumed token still
 * returns 204, since the desired end state holds either way.
 */

use axum::{extract::State, http::StatusCode, Json};

use crate::backend::auth::tokens::take_refresh_token;
use crate::backend::error::ApiError;
use crate::backend::server::AppState;
use crate::shared::api::LogoutRequest;

/// Handle POST /auth/logout
pub async fn logout(
    State(state): State<AppState>,
    Json(request): Json<LogoutRequest>,
) -> Result<StatusCode, ApiError> {
    if let Some(record) = take_refresh_token(&state.db, &request.refresh_token).await? {
        tracing::info!("User {} logged out", record.user_id);
    }
    Ok(StatusCode::NO_CONTENT)
}
