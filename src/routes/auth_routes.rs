/**
 * Authentication Routes
 *
 * Binds the auth endpoints:
 *
 * - `POST /api/auth/register` - public (one-time provisioning)
 * - `POST /api/auth/login` - public
 * - `GET /api/auth/me` - requires bearer token
 */

use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;

use crate::auth::{get_me, login, register};
use crate::middleware::auth::auth_middleware;
use crate::server::state::AppState;

/// Configure authentication routes
pub fn configure_auth_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    router
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route(
            "/api/auth/me",
            get(get_me).route_layer(from_fn_with_state(state.clone(), auth_middleware)),
        )
}
