//! Sign-out flow.

use admin_app::AdminApp;
use auth_provider::{AuthError, AuthProvider};
use tracing::{info, warn};

use crate::messages;
use crate::Outcome;

/// Signs the current user out through the provider.
///
/// On success the container's mirrored feed clears the identity and the
/// logout notification is set. On failure the previously logged-in user is
/// left untouched and the connection warning is set.
pub async fn sign_out(app: &AdminApp, provider: &dyn AuthProvider) -> Outcome {
    match provider.sign_out().await {
        Ok(()) => {
            info!("sign-out succeeded");
            app.set_notification(Some(messages::SIGN_OUT_OK.to_string()));
            Outcome::Ok
        }
        Err(error @ AuthError::Unreachable) => {
            warn!(code = error.code(), "sign-out failed, backend unreachable");
            app.set_warning_message(Some(messages::SIGN_OUT_OFFLINE.to_string()));
            Outcome::Fail
        }
        Err(error @ AuthError::InvalidCredentials) => {
            // sign_out performs no credential check; a provider reporting
            // this is nonconforming. Surface it as the connection-path
            // failure rather than swallowing it.
            warn!(code = error.code(), "sign-out reported a credential failure from a nonconforming provider");
            app.set_warning_message(Some(messages::SIGN_OUT_OFFLINE.to_string()));
            Outcome::Fail
        }
    }
}
