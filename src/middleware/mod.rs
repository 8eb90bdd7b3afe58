//! Middleware Module
//!
//! Request-processing middleware. Currently only the bearer-token auth
//! guard protecting the admin-only portfolio routes.

/// Bearer-token authentication middleware
pub mod auth;

pub use auth::{auth_middleware, AuthAdmin, AuthenticatedAdmin};
