//! Sign-in flow.

use admin_app::AdminApp;
use admin_types::Credentials;
use auth_provider::{AuthError, AuthProvider};
use tracing::{info, warn};

use crate::messages;
use crate::Outcome;

/// Signs a user in through the provider and reflects the result in the app.
///
/// On success nothing is written here: the container mirrors the provider's
/// logged-user feed, so the new identity is already in place by the time the
/// provider future resolves. On failure the matching warning copy is set and
/// the flow reports [`Outcome::Fail`].
pub async fn sign_in(
    app: &AdminApp,
    provider: &dyn AuthProvider,
    credentials: Credentials,
) -> Outcome {
    match provider.sign_in_with_credentials(credentials).await {
        Ok(user) => {
            info!(uid = %user.uid, "sign-in succeeded");
            Outcome::Ok
        }
        Err(error @ AuthError::InvalidCredentials) => {
            warn!(code = error.code(), "sign-in rejected");
            app.set_warning_message(Some(messages::SIGN_IN_REJECTED.to_string()));
            Outcome::Fail
        }
        Err(error @ AuthError::Unreachable) => {
            warn!(code = error.code(), "sign-in failed, backend unreachable");
            app.set_warning_message(Some(messages::SIGN_IN_OFFLINE.to_string()));
            Outcome::Fail
        }
    }
}
