/**
 * Portfolio Routes
 *
 * Binds the portfolio endpoints. Reads are public; mutations sit behind
 * the auth middleware and accept one optional `image` upload as
 * multipart form data.
 *
 * `/api/portfolio/categories` is registered before `/api/portfolio/{id}`
 * so the literal segment wins over the id capture.
 */

use axum::middleware::from_fn_with_state;
use axum::routing::{get, post, put};
use axum::Router;

use crate::middleware::auth::auth_middleware;
use crate::portfolio::handlers::{
    create_portfolio, delete_portfolio, get_categories, get_portfolio_by_id, list_portfolio,
    update_portfolio,
};
use crate::server::state::AppState;

/// Configure portfolio routes
pub fn configure_portfolio_routes(router: Router<AppState>, state: &AppState) -> Router<AppState> {
    let guard = || from_fn_with_state(state.clone(), auth_middleware);

    router
        // Public routes
        .route("/api/portfolio", get(list_portfolio))
        .route("/api/portfolio/categories", get(get_categories))
        .route("/api/portfolio/{id}", get(get_portfolio_by_id))
        // Protected routes (admin only)
        .route(
            "/api/portfolio",
            post(create_portfolio).route_layer(guard()),
        )
        .route(
            "/api/portfolio/{id}",
            put(update_portfolio)
                .delete(delete_portfolio)
                .route_layer(guard()),
        )
}
