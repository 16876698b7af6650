//! Error taxonomy for authentication providers.

use thiserror::Error;

/// Result type alias for provider operations.
pub type AuthResult<T> = Result<T, AuthError>;

/// Authentication provider error type.
///
/// Two disjoint failure kinds: one the user can fix by retrying with correct
/// credentials, one the environment must fix. Callers branch on the variant,
/// never on the display text — the text is UI-adjacent copy, not a contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The supplied credentials do not match any known account.
    #[error("credentials are invalid")]
    InvalidCredentials,

    /// The authentication backend is unreachable.
    #[error("authentication backend is unreachable")]
    Unreachable,
}

impl AuthError {
    /// Stable machine-readable error code for IPC and remote command clients.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "invalid_credentials",
            Self::Unreachable => "unreachable",
        }
    }
}
