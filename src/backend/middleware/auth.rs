/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require user
 * authentication. It extracts and verifies the JWT from the Authorization
 * header and attaches the authenticated user to the request.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::tokens::verify_access_token;
use crate::backend::error::ApiError;
use crate::backend::server::AppState;

/// Authenticated user data extracted from the JWT.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the JWT from the Authorization header (`Bearer <token>`)
/// 2. Verifies signature and expiry
/// 3. Attaches `AuthenticatedUser` to request extensions for handlers
///
/// Returns 401 Unauthorized if the token is missing or invalid.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::authentication("Missing Authorization header")
        })?;

    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        ApiError::authentication("Expected 'Bearer <token>'")
    })?;

    let claims = verify_access_token(&app_state.settings.jwt_secret, token)?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|err| {
        tracing::error!("Invalid user id in token: {:?}", err);
        ApiError::authentication("Invalid token")
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        email: claims.email,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user.
///
/// Usable as a handler parameter on any route behind `auth_middleware`.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::authentication("Not authenticated")
            })?;

        Ok(AuthUser(user))
    }
}
