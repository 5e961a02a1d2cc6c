/**
 * Token Management
 *
 * Two token kinds back a session:
 *
 * - Short-lived JWT access tokens, verified statelessly on every request.
 * - Opaque refresh tokens stored server-side, single-use: consuming one
 *   deletes it, and the refresh endpoint issues a replacement (rotation).
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::backend::error::ApiError;

/// JWT claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id (UUID string)
    pub sub: String,
    pub email: String,
    /// Role tags, so clients can gate without a user fetch
    pub role: Vec<String>,
    /// Expiry (unix seconds)
    pub exp: i64,
    /// Issued at (unix seconds)
    pub iat: i64,
}

/// Sign an access token for the given user.
pub fn create_access_token(
    secret: &str,
    user_id: Uuid,
    email: &str,
    role: &[String],
    ttl_secs: u64,
) -> Result<String, ApiError> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        role: role.to_vec(),
        exp: (now + Duration::seconds(ttl_secs as i64)).timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|err| ApiError::internal(format!("Failed to sign token: {}", err)))
}

/// Verify an access token's signature and expiry.
pub fn verify_access_token(secret: &str, token: &str) -> Result<Claims, ApiError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| ApiError::authentication("Invalid or expired token"))
}

/// A row of the `refresh_tokens` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RefreshTokenRecord {
    pub id: Uuid,
    pub token: String,
    pub user_id: Uuid,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl RefreshTokenRecord {
    pub fn is_expired(&self) -> bool {
        self.expires_at < Utc::now()
    }
}

/// Generate an opaque refresh token string.
fn generate_token_string() -> String {
    format!(
        "{}{}",
        Uuid::new_v4().simple(),
        Uuid::new_v4().simple()
    )
}

/// Issue and store a new refresh token for a user.
pub async fn issue_refresh_token(
    pool: &SqlitePool,
    user_id: Uuid,
    ttl_secs: i64,
) -> Result<RefreshTokenRecord, sqlx::Error> {
    let now = Utc::now();
    let record = RefreshTokenRecord {
        id: Uuid::new_v4(),
        token: generate_token_string(),
        user_id,
        expires_at: now + Duration::seconds(ttl_secs),
        created_at: now,
    };

    sqlx::query(
        r#"
        INSERT INTO refresh_tokens (id, token, user_id, expires_at, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(record.id)
    .bind(&record.token)
    .bind(record.user_id)
    .bind(record.expires_at)
    .bind(record.created_at)
    .execute(pool)
    .await?;

    Ok(record)
}

/// Atomically consume a refresh token.
///
/// The DELETE-with-RETURNING makes rotation race-safe: of two concurrent
/// refreshes with the same token, exactly one gets the row back. Returns
/// `None` when the token does not exist (unknown or already used).
pub async fn take_refresh_token(
    pool: &SqlitePool,
    token: &str,
) -> Result<Option<RefreshTokenRecord>, sqlx::Error> {
    sqlx::query_as::<_, RefreshTokenRecord>(
        r#"
        DELETE FROM refresh_tokens
        WHERE token = ?
        RETURNING id, token, user_id, expires_at, created_at
        "#,
    )
    .bind(token)
    .fetch_optional(pool)
    .await
}

/// Delete all refresh tokens for a user (full logout).
pub async fn delete_refresh_tokens_for_user(
    pool: &SqlitePool,
    user_id: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM refresh_tokens WHERE user_id = ?")
        .bind(user_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_access_token_roundtrip() {
        let user_id = Uuid::new_v4();
        let token = create_access_token(
            SECRET,
            user_id,
            "test@example.com",
            &["user".to_string()],
            900,
        )
        .unwrap();

        let claims = verify_access_token(SECRET, &token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email, "test@example.com");
        assert_eq!(claims.role, vec!["user".to_string()]);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = create_access_token(SECRET, Uuid::new_v4(), "a@b.c", &[], 900).unwrap();
        assert!(verify_access_token("other-secret", &token).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        assert!(verify_access_token(SECRET, "not.a.jwt").is_err());
    }

    #[test]
    fn test_token_strings_are_unique() {
        let a = generate_token_string();
        let b = generate_token_string();
        assert_ne!(a, b);
        assert_eq!(a.len(), 64);
    }
}
