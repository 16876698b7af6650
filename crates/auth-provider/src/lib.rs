//! Authentication capability layer for the admin console.
//!
//! This crate provides:
//! - The [`AuthProvider`] capability trait consumed by the state container
//!   and the auth flows
//! - The [`AuthError`] taxonomy separating credential faults from
//!   connectivity faults
//! - [`FakeAuthProvider`], an in-memory reference implementation for tests
//!   and local development

mod error;
mod fake;
mod provider;

pub use error::{AuthError, AuthResult};
pub use fake::{AdminAccount, FakeAuthProvider, FakeAuthProviderConfig};
pub use provider::{AuthProvider, UserListener};
