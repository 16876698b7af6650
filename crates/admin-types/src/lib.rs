//! Core data types for the admin console.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an admin user (UUID string).
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    /// Creates a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Creates a user ID from an existing string.
    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns the user ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// An authenticated admin identity.
///
/// Immutable once constructed. Deliberately carries no password field, so a
/// sign-in result is sanitized by construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    pub uid: UserId,
    pub username: String,
    pub email: String,
    pub photo_url: String,
}

impl AdminUser {
    /// Creates an admin user record.
    pub fn new(
        uid: impl Into<UserId>,
        username: impl Into<String>,
        email: impl Into<String>,
        photo_url: impl Into<String>,
    ) -> Self {
        Self {
            uid: uid.into(),
            username: username.into(),
            email: email.into(),
            photo_url: photo_url.into(),
        }
    }
}

/// Login input for a sign-in attempt.
///
/// Transient: used only as flow input, never stored in application state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Creates a credential pair.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}
