/**
 * Error Conversion
 *
 * Converts `ApiError` into the uniform JSON error envelope:
 *
 * ```json
 * {
 *   "success": false,
 *   "message": "Portfolio item not found",
 *   "error": "optional internal detail"
 * }
 * ```
 *
 * The `error` field carries internal detail (database messages, I/O
 * errors) and is only populated outside production mode. The flag is
 * latched once at startup from `AppConfig`, so the conversion itself
 * never consults the environment.
 */

use std::sync::atomic::{AtomicBool, Ordering};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::error::types::ApiError;

static EXPOSE_DETAILS: AtomicBool = AtomicBool::new(false);

/// Enable or disable internal error detail in responses
///
/// Called once during server initialization; enabled only in
/// development mode.
pub fn set_expose_details(expose: bool) {
    EXPOSE_DETAILS.store(expose, Ordering::Relaxed);
}

/// JSON body of an error response
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = if EXPOSE_DETAILS.load(Ordering::Relaxed) {
            self.detail()
        } else {
            None
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {:?}", self);
        } else {
            tracing::debug!("request rejected: {:?}", self);
        }

        let body = ErrorEnvelope {
            success: false,
            message: self.to_string(),
            error: detail,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let envelope = ErrorEnvelope {
            success: false,
            message: "Portfolio item not found".to_string(),
            error: None,
        };
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Portfolio item not found");
        // Absent detail must not serialize as null
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_envelope_with_detail() {
        let envelope = ErrorEnvelope {
            success: false,
            message: "Server Error".to_string(),
            error: Some("pool timed out".to_string()),
        };
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["error"], "pool timed out");
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::not_found("Portfolio item not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError::invalid_credentials().into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
