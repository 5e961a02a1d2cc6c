/**
 * User Profile Persistence
 *
 * Updates to a user's own account row: profile fields and the password
 * hash. Reads go through `auth::users`.
 */

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::auth::users::UserRecord;

/// Apply a field-wise profile update. `None` leaves the column unchanged.
///
/// Returns `None` when the user row does not exist.
pub async fn update_profile(
    pool: &SqlitePool,
    user_id: Uuid,
    name: Option<&str>,
    avatar: Option<&str>,
) -> Result<Option<UserRecord>, sqlx::Error> {
    sqlx::query_as::<_, UserRecord>(
        r#"
        UPDATE users SET
            name = COALESCE(?, name),
            avatar = COALESCE(?, avatar),
            updated_at = ?
        WHERE id = ?
        RETURNING id, name, email, password_hash, avatar, role, permissions, created_at, updated_at
        "#,
    )
    .bind(name)
    .bind(avatar)
    .bind(Utc::now())
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Replace a user's password hash.
///
/// Returns the number of affected rows (zero when the user is gone).
pub async fn update_password_hash(
    pool: &SqlitePool,
    user_id: Uuid,
    password_hash: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("UPDATE users SET password_hash = ?, updated_at = ? WHERE id = ?")
        .bind(password_hash)
        .bind(Utc::now())
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}
