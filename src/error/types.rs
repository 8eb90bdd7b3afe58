/**
 * API Error Types
 *
 * This module defines the error type returned by HTTP handlers. Every
 * variant maps to an HTTP status code and a public message; internal
 * detail (database errors, I/O errors) is kept separate so it can be
 * withheld in production responses.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// API error returned by handlers
///
/// Handlers return `Result<_, ApiError>`; the error is converted into the
/// uniform `{success: false, message, error?}` envelope by `IntoResponse`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed request field, out-of-range year, invalid enum value
    #[error("{0}")]
    Validation(String),

    /// Bad credentials or missing/invalid/expired token
    #[error("{0}")]
    Unauthorized(String),

    /// Unresolvable identifier
    #[error("{0}")]
    NotFound(String),

    /// Duplicate email at registration
    #[error("{0}")]
    Conflict(String),

    /// Datastore failure
    #[error("Server Error")]
    Database(#[from] sqlx::Error),

    /// Unexpected internal failure (hashing, token signing, asset I/O)
    #[error("Server Error")]
    Internal(String),
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// The generic credential failure
    ///
    /// Unknown email and wrong password must produce byte-identical
    /// responses, so both paths go through this constructor.
    pub fn invalid_credentials() -> Self {
        Self::Unauthorized("Invalid credentials".to_string())
    }

    /// The generic token failure used by the auth guard
    pub fn unauthorized() -> Self {
        Self::Unauthorized("Not authorized to access this route".to_string())
    }

    /// HTTP status code for this error
    ///
    /// Conflict maps to 400 rather than 409, matching the API contract of
    /// the registration endpoint.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Internal detail, if any, for non-production error envelopes
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::Database(e) => Some(e.to_string()),
            Self::Internal(detail) => Some(detail.clone()),
            _ => None,
        }
    }
}

impl From<bcrypt::BcryptError> for ApiError {
    fn from(e: bcrypt::BcryptError) -> Self {
        Self::Internal(format!("password hashing failed: {e}"))
    }
}

impl From<jsonwebtoken::errors::Error> for ApiError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        Self::Internal(format!("token signing failed: {e}"))
    }
}

impl From<std::io::Error> for ApiError {
    fn from(e: std::io::Error) -> Self {
        Self::Internal(format!("asset storage failed: {e}"))
    }
}

impl From<axum::extract::multipart::MultipartError> for ApiError {
    fn from(e: axum::extract::multipart::MultipartError) -> Self {
        Self::Validation(format!("Malformed multipart request: {e}"))
    }
}
