/**
 * Router Configuration
 *
 * Assembles the full application router:
 *
 * 1. Auth and portfolio API routes
 * 2. Contact, health, and placeholder endpoints
 * 3. Static serving for the admin panel and uploaded assets
 * 4. CORS (restricted to the configured frontend origin), request tracing
 * 5. Fallback returning the 404 envelope
 */

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::response::{IntoResponse, Json};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::contact::submit_contact;
use crate::error::ApiError;
use crate::routes::auth_routes::configure_auth_routes;
use crate::routes::portfolio_routes::configure_portfolio_routes;
use crate::server::state::AppState;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let router = Router::new();
    let router = configure_auth_routes(router, &state);
    let router = configure_portfolio_routes(router, &state);

    let router = router
        .route("/api/contact", post(submit_contact))
        .route("/api/health", get(health_check))
        // Placeholder endpoints, pending the testimonials and services
        // content models
        .route("/api/services", get(|| placeholder("Services")))
        .route("/api/testimonials", get(|| placeholder("Testimonials")))
        // Admin panel is a static bundle consuming this API
        .nest_service("/admin", ServeDir::new("public/admin"))
        // Uploaded portfolio images
        .nest_service(
            "/uploads",
            ServeDir::new(state.config.upload_dir.clone()),
        )
        .fallback(route_not_found);

    let cors = cors_layer(&state.config.frontend_url);

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS restricted to the marketing-site origin, credentials allowed
fn cors_layer(frontend_url: &str) -> CorsLayer {
    let origin = frontend_url
        .parse::<HeaderValue>()
        .unwrap_or_else(|_| HeaderValue::from_static("http://localhost:4321"));

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
}

/// Temporary response for endpoints that are not built yet
async fn placeholder(name: &'static str) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "success": true,
        "message": format!("{name} endpoint - Coming soon"),
    }))
}

/// GET /api/health
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "OK",
        "message": "Server is running",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Fallback for unmatched paths
async fn route_not_found() -> axum::response::Response {
    ApiError::not_found("Route not found").into_response()
}
