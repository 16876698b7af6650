//! In-memory fake provider.
//!
//! Backs tests and local development with a fixed account directory and an
//! `offline` switch. Ships in the library, not behind `cfg(test)`, so every
//! downstream crate can drive real provider behavior without a backend.

use std::sync::Mutex;

use admin_types::{AdminUser, Credentials};
use async_trait::async_trait;
use change_feed::{ChangeFeed, Subscription};
use tracing::{debug, info, warn};

use crate::error::{AuthError, AuthResult};
use crate::provider::{AuthProvider, UserListener};

/// A directory entry backing the fake provider.
///
/// `credentials.email` is the lookup key, expected unique by contract but
/// not enforced; on duplicates the first match wins.
#[derive(Clone, Debug)]
pub struct AdminAccount {
    pub user: AdminUser,
    pub credentials: Credentials,
    pub id: String,
}

/// Configuration for the fake provider.
#[derive(Debug, Default)]
pub struct FakeAuthProviderConfig {
    /// Fixed directory of valid accounts.
    pub accounts: Vec<AdminAccount>,

    /// When set, both operations fail with [`AuthError::Unreachable`]
    /// before touching any state.
    pub offline: bool,

    /// Optional pre-existing session. Validated against the directory at
    /// construction; an invalid pair is silently ignored and the provider
    /// starts signed out.
    pub logged_in_as: Option<Credentials>,
}

/// In-memory [`AuthProvider`] implementation.
pub struct FakeAuthProvider {
    accounts: Vec<AdminAccount>,
    offline: bool,
    logged_user: Mutex<Option<AdminUser>>,
    feed: ChangeFeed<Option<AdminUser>>,
}

impl FakeAuthProvider {
    /// Creates a fake provider from its configuration.
    pub fn new(config: FakeAuthProviderConfig) -> Self {
        let provider = Self {
            accounts: config.accounts,
            offline: config.offline,
            logged_user: Mutex::new(None),
            feed: ChangeFeed::new(),
        };

        if let Some(credentials) = config.logged_in_as {
            match provider.lookup_valid(&credentials) {
                Some(user) => {
                    debug!(uid = %user.uid, "fake auth: resuming pre-existing session");
                    *provider.logged_user.lock().expect("lock poisoned") = Some(user);
                }
                None => {
                    // Permissive by contract: a bad seeded pair is ignored.
                    debug!("fake auth: seeded credentials are invalid, starting signed out");
                }
            }
        }

        provider
    }

    /// Returns the current logged-in identity.
    pub fn logged_user(&self) -> Option<AdminUser> {
        self.logged_user.lock().expect("lock poisoned").clone()
    }

    fn find_account_by_email(&self, email: &str) -> Option<&AdminAccount> {
        self.accounts
            .iter()
            .find(|account| account.credentials.email == email)
    }

    fn lookup_valid(&self, credentials: &Credentials) -> Option<AdminUser> {
        let account = self.find_account_by_email(&credentials.email)?;
        (account.credentials.password == credentials.password).then(|| account.user.clone())
    }

    fn set_logged_user(&self, user: Option<AdminUser>) {
        *self.logged_user.lock().expect("lock poisoned") = user.clone();
        self.feed.notify(&user);
    }
}

#[async_trait]
impl AuthProvider for FakeAuthProvider {
    async fn sign_in_with_credentials(&self, credentials: Credentials) -> AuthResult<AdminUser> {
        if self.offline {
            warn!("fake auth: sign-in attempted while offline");
            return Err(AuthError::Unreachable);
        }

        match self.lookup_valid(&credentials) {
            Some(user) => {
                info!(uid = %user.uid, "fake auth: sign-in succeeded");
                self.set_logged_user(Some(user.clone()));
                Ok(user)
            }
            None => {
                warn!(email = %credentials.email, "fake auth: sign-in rejected");
                Err(AuthError::InvalidCredentials)
            }
        }
    }

    async fn sign_out(&self) -> AuthResult<()> {
        if self.offline {
            warn!("fake auth: sign-out attempted while offline");
            return Err(AuthError::Unreachable);
        }

        info!("fake auth: signed out");
        self.set_logged_user(None);
        Ok(())
    }

    fn on_logged_user_change(&self, listener: UserListener) -> Subscription {
        // Replay the current identity at registration, then deliver changes.
        let current = self.logged_user();
        listener(&current);
        self.feed.subscribe(move |user| listener(user))
    }
}
