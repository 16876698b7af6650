//! # Admin App
//!
//! Observable application state container for the admin console.
//!
//! ## Design Principles
//!
//! - The container is the sole writer of its own state
//! - Every setter is a broadcast point: write the field, then notify
//! - Snapshots are atomic clones; readers never observe torn state
//! - Container feeds do not replay on subscribe; the provider feed does —
//!   that asymmetry is how the initial identity is bootstrapped
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use admin_app::{configure_admin_app, select_user, AdminAppConfig};
//! use auth_provider::{FakeAuthProvider, FakeAuthProviderConfig};
//!
//! let provider = Arc::new(FakeAuthProvider::new(FakeAuthProviderConfig::default()));
//! let app = configure_admin_app(AdminAppConfig {
//!     auth_provider: provider,
//!     initial_state: None,
//! });
//!
//! // No directory, no seeded session: starts signed out.
//! assert!(select_user(&app).is_none());
//! ```

mod app;
mod selectors;
mod state;

#[cfg(test)]
mod tests;

pub use app::{configure_admin_app, AdminApp, AdminAppConfig};
pub use selectors::{select_notification, select_user, select_warning_message};
pub use state::AppState;
