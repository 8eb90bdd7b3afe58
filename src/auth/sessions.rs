/**
 * Session Tokens
 *
 * JWT creation and verification for admin sessions. Tokens are signed
 * with HS256 using the secret from `AppConfig` and expire after 7 days.
 * Nothing is persisted server-side; validity is purely cryptographic.
 */

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Token lifetime: 7 days
pub const TOKEN_TTL_SECS: u64 = 7 * 24 * 60 * 60;

/// JWT claims embedded in a session token
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Admin ID
    pub sub: String,
    /// Admin email
    pub email: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Create a signed session token for an admin
pub fn create_token(
    admin_id: Uuid,
    email: &str,
    secret: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = unix_now();
    let claims = Claims {
        sub: admin_id.to_string(),
        email: email.to_string(),
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };

    let key = EncodingKey::from_secret(secret.as_ref());
    encode(&Header::default(), &claims, &key)
}

/// Verify a session token and return its claims
///
/// Fails on malformed tokens, signature mismatch (different secret), and
/// expiry.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(secret.as_ref());
    let token_data = decode::<Claims>(token, &key, &Validation::default())?;
    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn test_token_round_trip() {
        let admin_id = Uuid::new_v4();
        let token = create_token(admin_id, "admin@stormlab.dev", SECRET).unwrap();
        assert!(!token.is_empty());

        let claims = verify_token(&token, SECRET).unwrap();
        assert_eq!(claims.sub, admin_id.to_string());
        assert_eq!(claims.email, "admin@stormlab.dev");
        assert_eq!(claims.exp, claims.iat + TOKEN_TTL_SECS);
    }

    #[test]
    fn test_malformed_token_rejected() {
        assert!(verify_token("not.a.token", SECRET).is_err());
        assert!(verify_token("", SECRET).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = create_token(Uuid::new_v4(), "admin@stormlab.dev", SECRET).unwrap();
        assert!(verify_token(&token, "other-secret").is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        // Hand-craft claims already past expiry (beyond default leeway)
        let now = unix_now();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            email: "admin@stormlab.dev".to_string(),
            exp: now.saturating_sub(3600),
            iat: now.saturating_sub(7200),
        };
        let key = EncodingKey::from_secret(SECRET.as_ref());
        let token = encode(&Header::default(), &claims, &key).unwrap();

        let err = verify_token(&token, SECRET).unwrap_err();
        assert_eq!(
            err.kind(),
            &jsonwebtoken::errors::ErrorKind::ExpiredSignature
        );
    }
}
