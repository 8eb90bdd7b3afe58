/**
 * Server Configuration
 *
 * Loads configuration from environment variables once at startup into an
 * immutable `AppConfig`. Components receive the configuration explicitly
 * through `AppState`; nothing else in the crate reads the environment.
 *
 * # Variables
 *
 * - `DATABASE_URL` (required) - PostgreSQL connection string
 * - `JWT_SECRET` (required) - HS256 signing secret for bearer tokens
 * - `PORT` (default 5000) - HTTP listen port
 * - `FRONTEND_URL` (default http://localhost:4321) - allowed CORS origin
 * - `APP_ENV` (default development) - runtime mode; controls whether
 *   internal error detail is exposed in responses
 * - `UPLOAD_DIR` (default public/uploads) - image asset directory
 * - `PUBLIC_BASE_URL` (default http://localhost:<PORT>) - base for
 *   constructing public asset URLs
 *
 * Missing `DATABASE_URL` or `JWT_SECRET` fails startup: the datastore and
 * the signing secret are required, unlike optional integrations.
 */

use std::path::PathBuf;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;

/// Runtime mode, driven by `APP_ENV`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Development,
    Production,
}

/// Configuration error raised at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {name}: {value}")]
    InvalidVar { name: &'static str, value: String },
}

/// Immutable server configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub port: u16,
    pub frontend_url: String,
    pub env: RunMode,
    pub upload_dir: PathBuf,
    pub public_base_url: String,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;
        let jwt_secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?;

        let port = match std::env::var("PORT") {
            Ok(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidVar {
                name: "PORT",
                value,
            })?,
            Err(_) => 5000,
        };

        let frontend_url = std::env::var("FRONTEND_URL")
            .unwrap_or_else(|_| "http://localhost:4321".to_string());

        let env = match std::env::var("APP_ENV").as_deref() {
            Ok("production") => RunMode::Production,
            _ => RunMode::Development,
        };

        let upload_dir = std::env::var("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("public/uploads"));

        let public_base_url = std::env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{port}"));

        Ok(Self {
            database_url,
            jwt_secret,
            port,
            frontend_url,
            env,
            upload_dir,
            public_base_url,
        })
    }

    pub fn is_development(&self) -> bool {
        self.env == RunMode::Development
    }
}

/// Connect to the database and run migrations
///
/// Unlike optional integrations, the datastore is required: a connection
/// or migration failure aborts startup.
pub async fn connect_database(database_url: &str) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;
    tracing::info!("Database ready");

    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> AppConfig {
        AppConfig {
            database_url: "postgres://localhost/stormlab_test".to_string(),
            jwt_secret: "test-secret".to_string(),
            port: 5000,
            frontend_url: "http://localhost:4321".to_string(),
            env: RunMode::Development,
            upload_dir: PathBuf::from("public/uploads"),
            public_base_url: "http://localhost:5000".to_string(),
        }
    }

    #[test]
    fn test_development_mode() {
        let config = test_config();
        assert!(config.is_development());

        let config = AppConfig {
            env: RunMode::Production,
            ..test_config()
        };
        assert!(!config.is_development());
    }
}
