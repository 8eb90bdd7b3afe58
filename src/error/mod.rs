//! API Error Module
//!
//! Defines the error type used by every HTTP handler and its conversion
//! into the uniform JSON error envelope.
//!
//! # Module Structure
//!
//! - **`types`** - Error type definition and constructors
//! - **`conversion`** - `IntoResponse` implementation (JSON envelope)
//!
//! # Status Code Mapping
//!
//! - `Validation` → 400 Bad Request (field-level message)
//! - `Conflict` → 400 Bad Request (duplicate email at registration)
//! - `Unauthorized` → 401 Unauthorized (deliberately generic message)
//! - `NotFound` → 404 Not Found
//! - `Database` / `Internal` → 500 Internal Server Error
//!
//! Internal error details are included in the envelope's `error` field only
//! outside production mode.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use conversion::set_expose_details;
pub use types::ApiError;
