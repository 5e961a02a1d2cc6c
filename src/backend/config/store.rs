/**
 * User Configuration Store
 *
 * Database operations for per-user configuration rows: lazy get-or-create,
 * full replacement with version bumping, and an optional compare-and-swap
 * variant for optimistic concurrency.
 *
 * # Concurrency
 *
 * - Creation races on the UNIQUE user_id constraint: the insert ignores
 *   conflicts and the caller re-reads, so concurrent first-time fetches all
 *   observe the same row.
 * - Updates bump `version` atomically in the upsert, so N concurrent
 *   updates advance the version by exactly N.
 */

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::shared::config::{
    ConfigPayload, ModuleConfig, ModuleProperty, DEFAULT_LANG, DEFAULT_LAYOUT, DEFAULT_THEME_URL,
};

/// A row of the `user_configs` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserConfigRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub config: Json<ConfigPayload>,
    pub version: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A row of the server-side canonical `modules` table.
#[derive(Debug, Clone, sqlx::FromRow)]
struct ModuleRow {
    name: String,
    path: String,
    permissions: Json<Vec<String>>,
    properties: Json<Vec<ModuleProperty>>,
}

const SELECT_BY_USER: &str = r#"
    SELECT id, user_id, config, version, created_at, updated_at
    FROM user_configs
    WHERE user_id = ?
"#;

/// Fetch a user's configuration, creating it from the catalog snapshot on
/// first access.
pub async fn get_or_create_config(
    pool: &SqlitePool,
    user_id: Uuid,
) -> Result<UserConfigRecord, sqlx::Error> {
    if let Some(record) = sqlx::query_as::<_, UserConfigRecord>(SELECT_BY_USER)
        .bind(user_id)
        .fetch_optional(pool)
        .await?
    {
        return Ok(record);
    }

    let snapshot = default_snapshot(pool).await?;
    let now = Utc::now();

    // Lost races are fine: DO NOTHING, then read whichever row won.
    sqlx::query(
        r#"
        INSERT INTO user_configs (id, user_id, config, version, created_at, updated_at)
        VALUES (?, ?, ?, 1, ?, ?)
        ON CONFLICT (user_id) DO NOTHING
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(Json(&snapshot))
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    tracing::info!("Initialized configuration for user {}", user_id);

    sqlx::query_as::<_, UserConfigRecord>(SELECT_BY_USER)
        .bind(user_id)
        .fetch_one(pool)
        .await
}

/// Build the initial payload: every enabled catalog module, ascending
/// sort order, plus the default scalars.
async fn default_snapshot(pool: &SqlitePool) -> Result<ConfigPayload, sqlx::Error> {
    let rows = sqlx::query_as::<_, ModuleRow>(
        r#"
        SELECT name, path, permissions, properties
        FROM modules
        WHERE enabled = 1
        ORDER BY sort_order ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    let modules = rows
        .into_iter()
        .map(|row| ModuleConfig {
            id: row.name,
            path: row.path,
            enabled: true,
            permissions: row.permissions.0,
            properties: row.properties.0,
            children: vec![],
        })
        .collect();

    Ok(ConfigPayload {
        lang: Some(DEFAULT_LANG.to_string()),
        theme_url: Some(DEFAULT_THEME_URL.to_string()),
        layout: Some(DEFAULT_LAYOUT.to_string()),
        modules,
    })
}

/// Replace a user's configuration, bumping the version counter.
///
/// Upserts so a PUT before any GET still works: a fresh row starts at
/// version 1, an existing row gets version + 1.
pub async fn update_config(
    pool: &SqlitePool,
    user_id: Uuid,
    payload: &ConfigPayload,
) -> Result<UserConfigRecord, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, UserConfigRecord>(
        r#"
        INSERT INTO user_configs (id, user_id, config, version, created_at, updated_at)
        VALUES (?, ?, ?, 1, ?, ?)
        ON CONFLICT (user_id) DO UPDATE SET
            config = excluded.config,
            version = user_configs.version + 1,
            updated_at = excluded.updated_at
        RETURNING id, user_id, config, version, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(Json(payload))
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
}

/// Replace a user's configuration only if its current version matches.
///
/// Returns `None` when the row is missing or the version is stale; the
/// caller maps that to 409.
pub async fn update_config_if_version(
    pool: &SqlitePool,
    user_id: Uuid,
    payload: &ConfigPayload,
    expected_version: i64,
) -> Result<Option<UserConfigRecord>, sqlx::Error> {
    let now = Utc::now();

    sqlx::query_as::<_, UserConfigRecord>(
        r#"
        UPDATE user_configs SET
            config = ?,
            version = version + 1,
            updated_at = ?
        WHERE user_id = ? AND version = ?
        RETURNING id, user_id, config, version, created_at, updated_at
        "#,
    )
    .bind(Json(payload))
    .bind(now)
    .bind(user_id)
    .bind(expected_version)
    .fetch_optional(pool)
    .await
}
