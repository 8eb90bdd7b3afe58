//! Portfolio Module
//!
//! Portfolio items shown on the marketing site and managed from the admin
//! panel.
//!
//! # Module Structure
//!
//! - **`model`** - Item record, category/status enumerations, invariants
//! - **`db`** - Database operations (CRUD, filtered listing, distinct categories)
//! - **`form`** - Multipart form collection and input normalization
//! - **`handlers`** - HTTP handlers for the portfolio endpoints

/// Item record and enumerations
pub mod model;

/// Database operations
pub mod db;

/// Multipart form handling and input validation
pub mod form;

/// HTTP handlers
pub mod handlers;

pub use model::{Category, ImageRef, ItemStatus, PortfolioItem};
