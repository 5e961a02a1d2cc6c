/**
 * User Configuration Handlers
 *
 * GET /config/user - Fetch (lazily creating) the caller's configuration
 * PUT /config/user - Replace the caller's configuration
 *
 * Both routes sit behind the auth middleware; the subject is always the
 * authenticated caller, never a path parameter.
 */

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use super::store::{get_or_create_config, update_config, update_config_if_version, UserConfigRecord};
use crate::backend::error::ApiError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::AppState;
use crate::shared::api::UserConfigResponse;
use crate::shared::config::ConfigPayload;

impl From<UserConfigRecord> for UserConfigResponse {
    fn from(record: UserConfigRecord) -> Self {
        UserConfigResponse {
            id: record.id,
            user_config: record.config.0,
            version: record.version,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Handle GET /config/user
pub async fn get_user_config(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
) -> Result<Json<UserConfigResponse>, ApiError> {
    let record = get_or_create_config(&state.db, auth.user_id).await?;
    Ok(Json(record.into()))
}

/// Query parameters for PUT /config/user.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateConfigQuery {
    /// When set, the update only applies if the stored version matches;
    /// a stale value yields 409. Absent means last-write-wins.
    pub expected_version: Option<i64>,
}

/// Handle PUT /config/user
pub async fn put_user_config(
    State(state): State<AppState>,
    AuthUser(auth): AuthUser,
    Query(query): Query<UpdateConfigQuery>,
    Json(payload): Json<ConfigPayload>,
) -> Result<Json<UserConfigResponse>, ApiError> {
    payload.validate()?;

    let record = match query.expected_version {
        Some(expected) => update_config_if_version(&state.db, auth.user_id, &payload, expected)
            .await?
            .ok_or_else(|| {
                tracing::warn!(
                    "Stale config update for user {} (expected version {})",
                    auth.user_id,
                    expected
                );
                ApiError::conflict("Configuration was modified concurrently")
            })?,
        None => update_config(&state.db, auth.user_id, &payload).await?,
    };

    tracing::info!(
        "Updated configuration for user {} to version {}",
        auth.user_id,
        record.version
    );
    Ok(Json(record.into()))
}
