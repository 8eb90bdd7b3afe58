//! Routes Module
//!
//! HTTP route configuration and router assembly.
//!
//! # Module Structure
//!
//! - **`router`** - Main router assembly (layers, static files, fallback)
//! - **`auth_routes`** - /api/auth/* bindings
//! - **`portfolio_routes`** - /api/portfolio/* bindings (guarded mutations)

/// Main router assembly
pub mod router;

/// Authentication route bindings
pub mod auth_routes;

/// Portfolio route bindings
pub mod portfolio_routes;

pub use router::create_router;
