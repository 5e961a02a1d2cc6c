/**
 * Registration Handler
 *
 * POST /auth/register - Create an account and issue a session.
 *
 * Validation happens before any database work; a duplicate email maps to
 * 409 via the unique constraint rather than a racy pre-check.
 */

use axum::{extract::State, Json};

use super::issue_session;
use crate::backend::auth::users::create_user;
use crate::backend::config::get_or_create_config;
use crate::backend::error::ApiError;
use crate::backend::server::AppState;
use crate::shared::api::{AuthResponse, RegisterRequest};

fn validate(request: &RegisterRequest) -> Result<(), ApiError> {
    if request.name.trim().is_empty() {
        return Err(ApiError::validation("name", "Name must not be empty"));
    }
    if !request.email.contains('@') {
        return Err(ApiError::validation("email", "Invalid email format"));
    }
    if request.password.len() < 8 {
        return Err(ApiError::validation(
            "password",
            "Password must be at least 8 characters",
        ));
    }
    Ok(())
}

/// Handle POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    validate(&request)?;

    let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
        .map_err(|err| ApiError::internal(format!("Password hashing failed: {}", err)))?;

    let user = create_user(
        &state.db,
        request.name.trim(),
        &request.email,
        &password_hash,
    )
    .await?;

    let (access_token, refresh_token) =
        issue_session(&state.db, &state.settings, &user, false).await?;

    let config = get_or_create_config(&state.db, user.id).await?;

    tracing::info!("Registered user {} ({})", user.id, user.email);
    Ok(Json(AuthResponse {
        user: user.into(),
        access_token,
        refresh_token,
        expires_in: state.settings.access_token_ttl_secs,
        user_config: config.config.0,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_good_request() {
        assert!(validate(&request("Alice", "alice@example.com", "password123")).is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_fields() {
        assert!(validate(&request("", "alice@example.com", "password123")).is_err());
        assert!(validate(&request("Alice", "not-an-email", "password123")).is_err());
        assert!(validate(&request("Alice", "alice@example.com", "short")).is_err());
    }
}
