//! The authentication capability contract.

use admin_types::{AdminUser, Credentials};
use async_trait::async_trait;
use change_feed::Subscription;

use crate::error::AuthResult;

/// Listener for changes to a provider's logged-in identity.
pub type UserListener = Box<dyn Fn(&Option<AdminUser>) + Send + Sync>;

/// Capability contract for an authentication backend.
///
/// The provider owns the authoritative logged-in identity. Consumers mirror
/// it through [`AuthProvider::on_logged_user_change`], which — unlike the
/// admin app's own feeds — invokes the listener immediately with the current
/// identity before delivering changes. That replay is how a freshly
/// constructed container learns about a pre-existing session.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Authenticates with an email/password pair.
    ///
    /// Resolves with the authenticated identity, or fails with
    /// [`AuthError::InvalidCredentials`] when no account matches and
    /// [`AuthError::Unreachable`] when the backend cannot be reached.
    ///
    /// [`AuthError::InvalidCredentials`]: crate::AuthError::InvalidCredentials
    /// [`AuthError::Unreachable`]: crate::AuthError::Unreachable
    async fn sign_in_with_credentials(&self, credentials: Credentials) -> AuthResult<AdminUser>;

    /// Ends the current session.
    ///
    /// Performs no credential check; the only failure is
    /// [`AuthError::Unreachable`], which leaves the logged-in identity
    /// untouched.
    ///
    /// [`AuthError::Unreachable`]: crate::AuthError::Unreachable
    async fn sign_out(&self) -> AuthResult<()>;

    /// Subscribes to the provider's logged-in identity.
    ///
    /// The listener fires immediately with the current identity, then again
    /// on every change (`None` once signed out).
    fn on_logged_user_change(&self, listener: UserListener) -> Subscription;
}
