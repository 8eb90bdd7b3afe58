/**
 * Register Handler
 *
 * POST /api/auth/register - one-time admin provisioning.
 *
 * Registration is open so the first admin can be created; subsequent
 * registrations only fail on duplicate email. Locking this endpoint down
 * after provisioning is an operational concern, not an API one.
 *
 * # Process
 *
 * 1. Validate name, email format, and password length
 * 2. Reject duplicate email
 * 3. Hash the password with bcrypt
 * 4. Insert the admin and return a signed token
 */

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use bcrypt::{hash, DEFAULT_COST};

use crate::auth::admins::{create_admin, get_admin_by_email};
use crate::auth::handlers::types::{AdminProfile, AuthResponse, RegisterRequest};
use crate::auth::sessions::create_token;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Minimum password length, matching the admin schema
const MIN_PASSWORD_LEN: usize = 6;

pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let name = request.name.trim();
    let email = request.email.trim();

    if name.is_empty() {
        return Err(ApiError::validation("Please add a name"));
    }
    if email.is_empty() || !email.contains('@') {
        return Err(ApiError::validation("Please add a valid email"));
    }
    if request.password.len() < MIN_PASSWORD_LEN {
        return Err(ApiError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }

    if get_admin_by_email(&state.pool, email).await?.is_some() {
        tracing::warn!("Registration rejected, email already exists: {}", email);
        return Err(ApiError::conflict("Admin already exists"));
    }

    let password_hash = hash(&request.password, DEFAULT_COST)?;

    let admin = create_admin(&state.pool, name, email, &password_hash).await?;
    let token = create_token(admin.id, &admin.email, &state.config.jwt_secret)?;

    tracing::info!("Admin registered: {} ({})", admin.name, admin.email);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            success: true,
            message: "Admin registered successfully".to_string(),
            token,
            admin: AdminProfile::from(&admin),
        }),
    ))
}
