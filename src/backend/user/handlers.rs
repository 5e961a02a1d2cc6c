/**
 * User Profile Handlers
 *
 * GET /user/profile  - The caller's account data
 * PUT /user/profile  - Field-wise profile update (name, avatar)
 * PUT /user/password - Replace the password
 *
 * All routes sit behind the auth middleware and only ever touch the
 * caller's own row. The profile update is a typed field list, never a
 * pass-through of arbitrary columns.
 */

use axum::{extract::State, http::StatusCode, Json};

use super::store::{update_password_hash, update_profile};
use crate::backend::auth::users::get_user_by_id;
use crate::backend::auth::tokens::delete_refresh_tokens_for_user;
use crate::backend::error::ApiError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::AppState;
use crate::shared::api::{ProfileUpdateRequest, PasswordChangeRequest};
use crate::shared::config::User;

/// Handle GET /user/profile
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> Result<Json<User>, ApiError> {
    let record = get_user_by_id(&state.db, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User"))?;
    Ok(Json(record.into()))
}

/// Handle PUT /user/profile
pub async fn put_profile(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Json(request): Json<ProfileUpdateRequest>,
) -> Result<Json<User>, ApiError> {
    if let Some(name) = &request.name {
        if name.trim().is_empty() {
            return Err(ApiError::validation("name", "Name must not be empty"));
        }
    }

    let record = update_profile(
        &state.db,
        auth.user_id,
        request.name.as_deref().map(str::trim),
        request.avatar.as_deref(),
    )
    .await?
    .ok_or_else(|| ApiError::not_found("User"))?;

    tracing::info!("Updated profile for user {}", auth.user_id);
    Ok(Json(record.into()))
}

/// Handle PUT /user/password
///
/// Revokes all refresh tokens afterwards, so stolen sessions die with the
/// old password.
pub async fn put_password(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Json(request): Json<PasswordChangeRequest>,
) -> Result<StatusCode, ApiError> {
    if request.password.len() < 8 {
        return Err(ApiError::validation(
            "password",
            "Password must be at least 8 characters",
        ));
    }

    let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
        .map_err(|err| ApiError::internal(format!("Password hashing failed: {}", err)))?;

    let affected = update_password_hash(&state.db, auth.user_id, &password_hash).await?;
    if affected == 0 {
        return Err(ApiError::not_found("User"));
    }

    delete_refresh_tokens_for_user(&state.db, auth.user_id).await?;

    tracing::info!("Changed password for user {}", auth.user_id);
    Ok(StatusCode::NO_CONTENT)
}
