/**
 * Resource Catalog Store
 *
 * Read-only queries over the language and theme catalogs. Listings only
 * return enabled rows; direct lookups by key return whatever exists, so a
 * disabled entry can still be fetched explicitly.
 */

use std::collections::HashMap;

use sqlx::types::Json;
use sqlx::SqlitePool;

use crate::shared::api::{LanguageResponse, ThemeResponse};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LanguageRow {
    pub code: String,
    pub name: String,
    pub content: Json<HashMap<String, String>>,
    pub version: String,
    pub enabled: bool,
}

impl From<LanguageRow> for LanguageResponse {
    fn from(row: LanguageRow) -> Self {
        LanguageResponse {
            code: row.code,
            name: row.name,
            content: row.content.0,
            version: row.version,
            enabled: row.enabled,
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ThemeRow {
    pub id: String,
    pub name: String,
    pub url: String,
    pub css: String,
    pub version: String,
    pub enabled: bool,
    pub is_default: bool,
}

impl From<ThemeRow> for ThemeResponse {
    fn from(row: ThemeRow) -> Self {
        ThemeResponse {
            id: row.id,
            name: row.name,
            url: row.url,
            css: row.css,
            version: row.version,
            enabled: row.enabled,
            is_default: row.is_default,
        }
    }
}

pub async fn list_languages(pool: &SqlitePool) -> Result<Vec<LanguageRow>, sqlx::Error> {
    sqlx::query_as::<_, LanguageRow>(
        "SELECT code, name, content, version, enabled FROM languages WHERE enabled = 1 ORDER BY code",
    )
    .fetch_all(pool)
    .await
}

pub async fn get_language(
    pool: &SqlitePool,
    code: &str,
) -> Result<Option<LanguageRow>, sqlx::Error> {
    sqlx::query_as::<_, LanguageRow>(
        "SELECT code, name, content, version, enabled FROM languages WHERE code = ?",
    )
    .bind(code)
    .fetch_optional(pool)
    .await
}

pub async fn list_themes(pool: &SqlitePool) -> Result<Vec<ThemeRow>, sqlx::Error> {
    sqlx::query_as::<_, ThemeRow>(
        r#"
        SELECT id, name, url, css, version, enabled, is_default
        FROM themes
        WHERE enabled = 1
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_theme(pool: &SqlitePool, id: &str) -> Result<Option<ThemeRow>, sqlx::Error> {
    sqlx::query_as::<_, ThemeRow>(
        "SELECT id, name, url, css, version, enabled, is_default FROM themes WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn get_default_theme(pool: &SqlitePool) -> Result<Option<ThemeRow>, sqlx::Error> {
    sqlx::query_as::<_, ThemeRow>(
        r#"
        SELECT id, name, url, css, version, enabled, is_default
        FROM themes
        WHERE is_default = 1 AND enabled = 1
        LIMIT 1
        "#,
    )
    .fetch_optional(pool)
    .await
}
