//! User-facing copy set by the auth flows.
//!
//! This text is UI copy, not a contract: the flows branch on error
//! variants, never on these strings.

/// Warning shown when a sign-in attempt is rejected.
pub const SIGN_IN_REJECTED: &str =
    "You do not have permission to enter the application. Check your email and password.";

/// Warning shown when the backend cannot be reached during sign-in.
pub const SIGN_IN_OFFLINE: &str =
    "Something went wrong with the connection. Please try again in a few minutes.";

/// Notification shown after a successful sign-out.
pub const SIGN_OUT_OK: &str = "You have successfully logged out.";

/// Warning shown when the backend cannot be reached during sign-out.
pub const SIGN_OUT_OFFLINE: &str = "Connection Error!!. You have not logged out.";
