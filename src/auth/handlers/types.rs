/**
 * Auth Handler Types
 *
 * Request and response types shared by the register, login, and me
 * handlers.
 */

use serde::{Deserialize, Serialize};

use crate::auth::admins::{Admin, AdminRole};

/// Register request
#[derive(Debug, Deserialize, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    /// Plaintext password, hashed before storage
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Admin profile safe to return to clients
///
/// Deliberately excludes the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: AdminRole,
}

impl From<&Admin> for AdminProfile {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id.to_string(),
            name: admin.name.clone(),
            email: admin.email.clone(),
            role: admin.role,
        }
    }
}

/// Response for register and login
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    /// Signed bearer token (7-day expiry)
    pub token: String,
    pub admin: AdminProfile,
}

/// Response for GET /api/auth/me
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub success: bool,
    pub data: AdminProfile,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_profile_never_carries_password_hash() {
        let admin = Admin {
            id: Uuid::new_v4(),
            name: "Storm Admin".to_string(),
            email: "admin@stormlab.dev".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            role: AdminRole::Standard,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let profile = AdminProfile::from(&admin);
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["email"], "admin@stormlab.dev");
        assert_eq!(json["role"], "standard");
        assert!(json.get("password_hash").is_none());
        assert!(!json.to_string().contains("secret"));
    }
}
