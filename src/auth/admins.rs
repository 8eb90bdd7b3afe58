/**
 * Admin Model and Database Operations
 *
 * Administrator accounts for the admin panel. The API only ever creates
 * admins (one-time provisioning via the register endpoint); updates and
 * deletions happen by direct datastore edits.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Admin role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminRole {
    Standard,
    Superadmin,
}

impl AdminRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Superadmin => "superadmin",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "standard" => Some(Self::Standard),
            "superadmin" => Some(Self::Superadmin),
            _ => None,
        }
    }
}

/// Admin record as stored in the database
///
/// The password hash never leaves the crate; API responses use
/// `AdminProfile` from the handler types instead.
#[derive(Debug, Clone)]
pub struct Admin {
    pub id: Uuid,
    pub name: String,
    /// Unique across all admins, enforced by the database
    pub email: String,
    /// bcrypt hash
    pub password_hash: String,
    pub role: AdminRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn admin_from_row(row: &sqlx::postgres::PgRow) -> Admin {
    use sqlx::Row;
    Admin {
        id: row.get("id"),
        name: row.get("name"),
        email: row.get("email"),
        password_hash: row.get("password_hash"),
        role: AdminRole::from_str(row.get::<String, _>("role").as_str())
            .unwrap_or(AdminRole::Standard),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// Create a new admin
pub async fn create_admin(
    pool: &PgPool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<Admin, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let row = sqlx::query(
        r#"
        INSERT INTO admins (id, name, email, password_hash, role, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING id, name, email, password_hash, role, created_at, updated_at
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(AdminRole::Standard.as_str())
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(admin_from_row(&row))
}

/// Get admin by email
pub async fn get_admin_by_email(pool: &PgPool, email: &str) -> Result<Option<Admin>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, name, email, password_hash, role, created_at, updated_at
        FROM admins
        WHERE email = $1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(admin_from_row))
}

/// Get admin by ID
pub async fn get_admin_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Admin>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, name, email, password_hash, role, created_at, updated_at
        FROM admins
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(admin_from_row))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        assert_eq!(AdminRole::from_str("standard"), Some(AdminRole::Standard));
        assert_eq!(
            AdminRole::from_str("superadmin"),
            Some(AdminRole::Superadmin)
        );
        assert_eq!(AdminRole::from_str("root"), None);
        assert_eq!(AdminRole::Superadmin.as_str(), "superadmin");
    }

    #[test]
    fn test_role_serde_is_lowercase() {
        let json = serde_json::to_string(&AdminRole::Standard).unwrap();
        assert_eq!(json, "\"standard\"");
    }
}
