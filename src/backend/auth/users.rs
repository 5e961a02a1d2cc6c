/**
 * User Persistence
 *
 * Database operations for user accounts: creation and lookup by email or
 * id. Role and permission tag lists are stored as JSON columns.
 */

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::error::ApiError;
use crate::shared::User;

/// A row of the `users` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub avatar: Option<String>,
    pub role: Json<Vec<String>>,
    pub permissions: Json<Vec<String>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        User {
            id: record.id,
            name: record.name,
            email: record.email,
            avatar: record.avatar,
            role: record.role.0,
            permissions: record.permissions.0,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Insert a new user with the default `user` role.
///
/// Returns `ApiError::Conflict` when the email is already registered.
pub async fn create_user(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<UserRecord, ApiError> {
    let id = Uuid::new_v4();
    let now = Utc::now();
    let role = Json(vec!["user".to_string()]);
    let permissions = Json(Vec::<String>::new());

    let record = sqlx::query_as::<_, UserRecord>(
        r#"
        INSERT INTO users (id, name, email, password_hash, role, permissions, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING id, name, email, password_hash, avatar, role, permissions, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(role)
    .bind(permissions)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
    .map_err(|err| match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            ApiError::conflict("Email is already registered")
        }
        _ => ApiError::from(err),
    })?;

    tracing::info!("Created user {} ({})", record.id, record.email);
    Ok(record)
}

/// Look up a user by email. Returns `None` when no such user exists.
pub async fn get_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<UserRecord>, sqlx::Error> {
    sqlx::query_as::<_, UserRecord>(
        r#"
        SELECT id, name, email, password_hash, avatar, role, permissions, created_at, updated_at
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Look up a user by id.
pub async fn get_user_by_id(
    pool: &SqlitePool,
    user_id: Uuid,
) -> Result<Option<UserRecord>, sqlx::Error> {
    sqlx::query_as::<_, UserRecord>(
        r#"
        SELECT id, name, email, password_hash, avatar, role, permissions, created_at, updated_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}
