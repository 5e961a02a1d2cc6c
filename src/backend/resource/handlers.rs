/**
 * Resource Catalog Handlers
 *
 * GET /resource/languages          - All enabled languages
 * GET /resource/languages/{code}   - One language by code
 * GET /resource/themes             - All enabled themes
 * GET /resource/themes/default     - The default theme
 * GET /resource/themes/{id}        - One theme by id
 *
 * All routes are public; catalog content is static and per-deployment,
 * not per-user.
 */

use axum::{
    extract::{Path, State},
    Json,
};

use super::store;
use crate::backend::error::ApiError;
use crate::backend::server::AppState;
use crate::shared::api::{LanguageResponse, ThemeResponse};

/// Handle GET /resource/languages
pub async fn list_languages(
    State(state): State<AppState>,
) -> Result<Json<Vec<LanguageResponse>>, ApiError> {
    let rows = store::list_languages(&state.db).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// Handle GET /resource/languages/{code}
pub async fn get_language(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<LanguageResponse>, ApiError> {
    let row = store::get_language(&state.db, &code)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Language '{}'", code)))?;
    Ok(Json(row.into()))
}

/// Handle GET /resource/themes
pub async fn list_themes(
    State(state): State<AppState>,
) -> Result<Json<Vec<ThemeResponse>>, ApiError> {
    let rows = store::list_themes(&state.db).await?;
    Ok(Json(rows.into_iter().map(Into::into).collect()))
}

/// Handle GET /resource/themes/{id}
pub async fn get_theme(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ThemeResponse>, ApiError> {
    let row = store::get_theme(&state.db, &id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Theme '{}'", id)))?;
    Ok(Json(row.into()))
}

/// Handle GET /resource/themes/default
pub async fn get_default_theme(
    State(state): State<AppState>,
) -> Result<Json<ThemeResponse>, ApiError> {
    let row = store::get_default_theme(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Default theme"))?;
    Ok(Json(row.into()))
}
