/**
 * Login Handler
 *
 * POST /api/auth/login - admin credential verification.
 *
 * # Security
 *
 * Unknown email and wrong password both return `invalid_credentials`, so
 * the response payloads are byte-identical and cannot be used to probe
 * which admins exist. Password comparison happens inside bcrypt.
 */

use axum::extract::State;
use axum::response::Json;
use bcrypt::verify;

use crate::auth::admins::get_admin_by_email;
use crate::auth::handlers::types::{AdminProfile, AuthResponse, LoginRequest};
use crate::auth::sessions::create_token;
use crate::error::ApiError;
use crate::server::state::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    if request.email.trim().is_empty() || request.password.is_empty() {
        return Err(ApiError::validation("Please provide email and password"));
    }

    let admin = get_admin_by_email(&state.pool, request.email.trim())
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login failed, unknown email");
            ApiError::invalid_credentials()
        })?;

    let valid = verify(&request.password, &admin.password_hash)?;
    if !valid {
        tracing::warn!("Login failed, wrong password for {}", admin.email);
        return Err(ApiError::invalid_credentials());
    }

    let token = create_token(admin.id, &admin.email, &state.config.jwt_secret)?;

    tracing::info!("Admin logged in: {}", admin.email);

    Ok(Json(AuthResponse {
        success: true,
        message: "Login successful".to_string(),
        token,
        admin: AdminProfile::from(&admin),
    }))
}
