//! Auth Handlers Module
//!
//! HTTP handlers for the authentication endpoints.
//!
//! - **`register`** - POST /api/auth/register - one-time admin provisioning
//! - **`login`** - POST /api/auth/login - credential verification
//! - **`me`** - GET /api/auth/me - current admin (requires bearer token)
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never serialized
//! - Unknown email and wrong password return identical 401 envelopes
//! - Tokens expire after 7 days; there is no revocation

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Current admin handler
pub mod me;

pub use types::{AdminProfile, AuthResponse, LoginRequest, RegisterRequest};

pub use login::login;
pub use me::get_me;
pub use register::register;
