/**
 * Server Configuration
 *
 * This module loads server settings from environment variables and owns
 * database connection setup, including running migrations.
 *
 * # Configuration Sources
 *
 * Settings come from environment variables with development-friendly
 * defaults; only secrets have no fallback in release builds.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use thiserror::Error;

/// Errors that prevent the server from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Runtime settings loaded once at startup.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    /// SQLite connection string, e.g. `sqlite://panelkit.db`
    pub database_url: String,
    /// HMAC secret for signing access tokens
    pub jwt_secret: String,
    /// Access token lifetime in seconds
    pub access_token_ttl_secs: u64,
    /// Refresh token lifetime in seconds
    pub refresh_token_ttl_secs: i64,
    /// TCP port to listen on
    pub port: u16,
}

impl ServerSettings {
    /// Load settings from the environment.
    ///
    /// `DATABASE_URL` and `JWT_SECRET` fall back to development defaults
    /// when unset; TTLs default to 15 minutes / 7 days.
    pub fn from_env() -> Result<Self, StartupError> {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://panelkit.db".to_string());

        let jwt_secret = match std::env::var("JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) => {
                tracing::warn!("JWT_SECRET not set, using development default");
                "panelkit-dev-secret".to_string()
            }
        };

        let access_token_ttl_secs = env_number("ACCESS_TOKEN_TTL_SECS", 900)?;
        let refresh_token_ttl_secs = env_number("REFRESH_TOKEN_TTL_SECS", 604_800)?;
        let port = env_number("SERVER_PORT", 3001)?;

        Ok(Self {
            database_url,
            jwt_secret,
            access_token_ttl_secs,
            refresh_token_ttl_secs,
            port,
        })
    }
}

fn env_number<T: FromStr>(name: &str, default: T) -> Result<T, StartupError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| StartupError::Config(format!("{} must be a number, got '{}'", name, raw))),
        Err(_) => Ok(default),
    }
}

/// Create the connection pool and run migrations.
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, StartupError> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database ready");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_number_default() {
        let value: u64 = env_number("PANELKIT_TEST_UNSET_VAR", 900).unwrap();
        assert_eq!(value, 900);
    }
}
