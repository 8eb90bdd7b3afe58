/**
 * Current Admin Handler
 *
 * GET /api/auth/me - returns the profile of the admin resolved from the
 * bearer token. The route is behind the auth middleware; this handler
 * only resolves the already-verified identity against the datastore.
 */

use axum::extract::State;
use axum::response::Json;

use crate::auth::admins::get_admin_by_id;
use crate::auth::handlers::types::{AdminProfile, MeResponse};
use crate::error::ApiError;
use crate::middleware::auth::AuthAdmin;
use crate::server::state::AppState;

pub async fn get_me(
    State(state): State<AppState>,
    AuthAdmin(identity): AuthAdmin,
) -> Result<Json<MeResponse>, ApiError> {
    // The token outlives admin deletion (no revocation), so the record
    // can legitimately be gone by now.
    let admin = get_admin_by_id(&state.pool, identity.admin_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token resolves to missing admin: {}", identity.admin_id);
            ApiError::not_found("Admin not found")
        })?;

    Ok(Json(MeResponse {
        success: true,
        data: AdminProfile::from(&admin),
    }))
}
