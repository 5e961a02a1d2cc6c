/**
 * Server Initialization
 *
 * Assembles the application: connects the database, seeds the resource
 * catalog, and builds the router with its state.
 */

use axum::Router;

use super::config::{connect_database, ServerSettings, StartupError};
use super::state::AppState;
use crate::backend::routes::create_router;
use crate::backend::seed::seed_catalog;

/// Build the complete application router.
///
/// Connects to the database (running migrations), seeds the module,
/// language, and theme catalogs, and wires up all routes.
pub async fn create_app(settings: ServerSettings) -> Result<Router, StartupError> {
    let pool = connect_database(&settings.database_url).await?;

    seed_catalog(&pool).await?;

    let state = AppState::new(pool, settings);
    Ok(create_router(state))
}
