//! Server Module
//!
//! Server configuration, shared application state, and app initialization.
//!
//! # Module Structure
//!
//! - **`config`** - Environment-driven configuration and database setup
//! - **`state`** - `AppState` shared across handlers
//! - **`init`** - Application assembly (`create_app`)

/// Environment-driven configuration
pub mod config;

/// Application state
pub mod state;

/// Application assembly
pub mod init;

pub use config::AppConfig;
pub use init::create_app;
pub use state::AppState;
