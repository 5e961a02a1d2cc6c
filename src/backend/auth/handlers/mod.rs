//! Authentication Handlers
//!
//! ## Module Structure
//!
//! ```text
//! handlers/
//! ├── login.rs     - POST /auth/login
//! ├── register.rs  - POST /auth/register
//! ├── refresh.rs   - POST /auth/refresh (token rotation)
//! └── logout.rs    - POST /auth/logout
//! ```

pub mod login;
pub mod logout;
pub mod refresh;
pub mod register;

pub use login::login;
pub use logout::logout;
pub use refresh::refresh;
pub use register::register;

use sqlx::SqlitePool;

use crate::backend::auth::tokens::{create_access_token, issue_refresh_token};
use crate::backend::auth::users::UserRecord;
use crate::backend::error::ApiError;
use crate::backend::server::config::ServerSettings;

/// Refresh token lifetime when the client asked to be remembered.
const REMEMBER_TTL_SECS: i64 = 30 * 24 * 60 * 60;

/// Issue a full token pair for a user.
pub(crate) async fn issue_session(
    pool: &SqlitePool,
    settings: &ServerSettings,
    user: &UserRecord,
    remember: bool,
) -> Result<(String, String), ApiError> {
    let access_token = create_access_token(
        &settings.jwt_secret,
        user.id,
        &user.email,
        &user.role.0,
        settings.access_token_ttl_secs,
    )?;

    let refresh_ttl = if remember {
        REMEMBER_TTL_SECS
    } else {
        settings.refresh_token_ttl_secs
    };
    let refresh = issue_refresh_token(pool, user.id, refresh_ttl).await?;

    Ok((access_token, refresh.token))
}
