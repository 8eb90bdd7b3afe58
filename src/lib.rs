//! StormLab Backend
//!
//! Backend API for the StormLab marketing site: a portfolio CRUD API with
//! admin authentication, a public contact endpoint, and a health check.
//!
//! # Overview
//!
//! The crate is organized into focused modules:
//!
//! - **`server`** - Configuration, application state, app initialization
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Admin accounts, JWT tokens, auth handlers
//! - **`middleware`** - Bearer-token authentication middleware
//! - **`portfolio`** - Portfolio item model, store, and CRUD handlers
//! - **`assets`** - Local-disk image asset store
//! - **`contact`** - Contact form submission endpoint
//! - **`error`** - API error type and JSON error envelope
//!
//! # Request Flow
//!
//! client → router → (auth middleware, if protected) → handler → store →
//! JSON envelope. There is no in-process shared mutable state: the database
//! pool, the configuration, and the asset store handle are all read-only
//! after startup.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and admin account management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Portfolio items: model, store, handlers
pub mod portfolio;

/// Local-disk image asset store
pub mod assets;

/// Contact form endpoint
pub mod contact;

/// API error types
pub mod error;

pub use error::ApiError;
pub use server::state::AppState;
