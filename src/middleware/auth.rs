/**
 * Authentication Middleware
 *
 * Guards admin-only routes. Extracts the bearer token from the
 * `Authorization` header, verifies signature and expiry against the
 * configured secret, and attaches the resolved admin identity to the
 * request extensions. On any failure the request is short-circuited with
 * a 401 envelope and no further processing happens.
 *
 * Validation is purely cryptographic: no session store or admin lookup
 * is consulted, so tokens remain valid until natural expiry even if the
 * admin record is later deleted. This is a documented limitation of the
 * stateless-token design.
 */

use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

use crate::auth::sessions::verify_token;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Admin identity resolved from a verified token
#[derive(Debug, Clone)]
pub struct AuthenticatedAdmin {
    pub admin_id: Uuid,
    pub email: String,
}

/// Extract the token from an `Authorization: Bearer <token>` header
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
}

/// Authentication middleware for protected routes
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(request.headers()).ok_or_else(|| {
        tracing::warn!("Missing or malformed Authorization header");
        ApiError::unauthorized()
    })?;

    let claims = verify_token(token, &state.config.jwt_secret).map_err(|e| {
        tracing::warn!("Token verification failed: {:?}", e.kind());
        ApiError::unauthorized()
    })?;

    let admin_id = Uuid::parse_str(&claims.sub).map_err(|_| {
        tracing::warn!("Token subject is not a valid admin id");
        ApiError::unauthorized()
    })?;

    request.extensions_mut().insert(AuthenticatedAdmin {
        admin_id,
        email: claims.email,
    });

    Ok(next.run(request).await)
}

/// Extractor for the authenticated admin
///
/// Usable as a handler parameter on any route behind `auth_middleware`.
#[derive(Debug, Clone)]
pub struct AuthAdmin(pub AuthenticatedAdmin);

impl<S> axum::extract::FromRequestParts<S> for AuthAdmin
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedAdmin>()
            .cloned()
            .map(AuthAdmin)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedAdmin missing from request extensions");
                ApiError::unauthorized()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_extract_bearer_token() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(extract_bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_extract_rejects_missing_header() {
        assert_eq!(extract_bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_extract_rejects_wrong_scheme() {
        let headers = headers_with("Basic dXNlcjpwYXNz");
        assert_eq!(extract_bearer_token(&headers), None);
    }

    #[test]
    fn test_extract_rejects_empty_token() {
        let headers = headers_with("Bearer ");
        assert_eq!(extract_bearer_token(&headers), None);
    }
}
