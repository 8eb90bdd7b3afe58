/**
 * Application State Management
 *
 * Defines the application state shared by all handlers and the `FromRef`
 * implementations for Axum state extraction.
 *
 * All fields are read-only after initialization: the pool manages its own
 * internal connection handling, the configuration is immutable, and the
 * asset store only holds its target directory. No cross-request
 * coordination exists anywhere in the crate.
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::assets::LocalAssetStore;
use crate::server::config::AppConfig;

/// Shared application state
///
/// Cloned per request by Axum; every field is cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub pool: PgPool,

    /// Immutable server configuration (signing secret, runtime mode, CORS origin)
    pub config: Arc<AppConfig>,

    /// Image asset store backing portfolio uploads
    pub assets: LocalAssetStore,
}

impl AppState {
    pub fn new(pool: PgPool, config: AppConfig) -> Self {
        let assets = LocalAssetStore::new(
            config.upload_dir.clone(),
            format!("{}/uploads", config.public_base_url.trim_end_matches('/')),
        );
        Self {
            pool,
            config: Arc::new(config),
            assets,
        }
    }
}

/// Allows handlers to extract the pool directly with `State(PgPool)`
impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

/// Allows handlers to extract the configuration directly
impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

/// Allows handlers to extract the asset store directly
impl FromRef<AppState> for LocalAssetStore {
    fn from_ref(state: &AppState) -> Self {
        state.assets.clone()
    }
}
