//! Authentication Module
//!
//! Admin accounts, JWT session tokens, and the auth HTTP handlers.
//!
//! # Module Structure
//!
//! - **`admins`** - Admin model and database operations
//! - **`sessions`** - JWT token creation and verification
//! - **`handlers`** - register / login / me HTTP handlers
//!
//! # Authentication Flow
//!
//! 1. **Register**: one-time admin provisioning → bcrypt hash stored → token returned
//! 2. **Login**: credentials verified → token returned
//! 3. **Me**: bearer token verified → admin profile returned
//!
//! Tokens are stateless: validity is signature + expiry only, there is no
//! server-side session store and no revocation. A token stays valid until
//! its natural 7-day expiry even if the admin record is later removed.

/// Admin model and database operations
pub mod admins;

/// JWT token creation and verification
pub mod sessions;

/// Auth HTTP handlers
pub mod handlers;

pub use admins::{Admin, AdminRole};
pub use handlers::{get_me, login, register};
pub use sessions::{create_token, verify_token, Claims};
