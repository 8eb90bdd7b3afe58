/**
 * Contact Form Endpoint
 *
 * POST /api/contact - marketing-site contact form submission.
 *
 * Validates the required fields and the email shape, then logs the
 * submission. Actual email dispatch is intentionally stubbed; the
 * marketing site treats this as a fire-and-forget integration.
 */

use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Contact form submission
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub service: Option<String>,
    pub budget: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub newsletter: bool,
}

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
    pub message: String,
}

/// Minimal email shape check: `local@domain.tld`, no whitespace
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || email.chars().any(char::is_whitespace) || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// POST /api/contact
pub async fn submit_contact(
    Json(request): Json<ContactRequest>,
) -> Result<Json<ContactResponse>, ApiError> {
    for (value, field) in [
        (&request.first_name, "firstName"),
        (&request.last_name, "lastName"),
        (&request.email, "email"),
        (&request.message, "message"),
    ] {
        if value.trim().is_empty() {
            return Err(ApiError::validation(format!("{field} is required")));
        }
    }

    if !is_valid_email(request.email.trim()) {
        return Err(ApiError::validation("Invalid email address"));
    }

    // Stub: log instead of dispatching email
    tracing::info!(
        "Contact form submission from {} {} <{}> (service: {}, budget: {}, newsletter: {})",
        request.first_name.trim(),
        request.last_name.trim(),
        request.email.trim(),
        request.service.as_deref().unwrap_or("Not specified"),
        request.budget.as_deref().unwrap_or("Not specified"),
        request.newsletter,
    );

    Ok(Json(ContactResponse {
        success: true,
        message: "Contact form submitted successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> ContactRequest {
        ContactRequest {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            company: None,
            service: None,
            budget: None,
            message: "Hello".to_string(),
            newsletter: false,
        }
    }

    #[tokio::test]
    async fn test_valid_submission() {
        let response = submit_contact(Json(valid_request())).await.unwrap();
        assert!(response.success);
        assert_eq!(response.message, "Contact form submitted successfully");
    }

    #[tokio::test]
    async fn test_missing_required_fields() {
        let mut request = valid_request();
        request.first_name = "  ".to_string();
        let err = submit_contact(Json(request)).await.unwrap_err();
        assert_eq!(err.to_string(), "firstName is required");

        let mut request = valid_request();
        request.message = String::new();
        let err = submit_contact(Json(request)).await.unwrap_err();
        assert_eq!(err.to_string(), "message is required");
    }

    #[tokio::test]
    async fn test_invalid_email_rejected() {
        let mut request = valid_request();
        request.email = "not-an-email".to_string();
        let err = submit_contact(Json(request)).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid email address");
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("a.b+c@sub.example.co"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@.com"));
        assert!(!is_valid_email("ada example@foo.com"));
        assert!(!is_valid_email("ada@@example.com"));
    }

    #[test]
    fn test_request_accepts_camel_case_json() {
        let request: ContactRequest = serde_json::from_str(
            r#"{"firstName":"Ada","lastName":"Lovelace","email":"ada@example.com",
                "message":"Hi","newsletter":true,"company":"Analytical Engines"}"#,
        )
        .unwrap();
        assert_eq!(request.first_name, "Ada");
        assert!(request.newsletter);
        assert_eq!(request.company.as_deref(), Some("Analytical Engines"));
    }
}
