/**
 * StormLab API Server Entry Point
 *
 * Initializes tracing, loads configuration from the environment, and
 * starts the Axum HTTP server.
 */

use stormlab_backend::server::config::AppConfig;
use stormlab_backend::server::init::create_app;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = AppConfig::from_env()?;
    let port = config.port;
    let mode = config.env;

    let app = create_app(config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("StormLab backend listening on {} ({:?} mode)", addr, mode);
    tracing::info!("Health check: http://localhost:{}/api/health", port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
