/**
 * Server Initialization
 *
 * Assembles the application: connects the database, builds the shared
 * state, latches the error-detail flag, and configures the router.
 *
 * # Initialization Steps
 *
 * 1. Connect the database pool and run migrations (fail-fast)
 * 2. Create the upload directory if it does not exist
 * 3. Latch error-detail exposure from the runtime mode
 * 4. Build `AppState` and the router
 */

use axum::Router;

use crate::error::set_expose_details;
use crate::routes::router::create_router;
use crate::server::config::{connect_database, AppConfig};
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Fails if the database is unreachable, migrations fail, or the upload
/// directory cannot be created. The server does not start degraded.
pub async fn create_app(config: AppConfig) -> Result<Router, Box<dyn std::error::Error>> {
    tracing::info!("Initializing StormLab backend");

    let pool = connect_database(&config.database_url).await?;

    tokio::fs::create_dir_all(&config.upload_dir).await?;

    // Stack traces and datastore messages leave the process only in development
    set_expose_details(config.is_development());

    let state = AppState::new(pool, config);
    Ok(create_router(state))
}
