//! The admin app container.
//!
//! # Write Path (strict order)
//!
//! 1. Replace the field under the state lock
//! 2. Release the lock
//! 3. Notify that field's feed with the new value
//!
//! The lock is held for the field write only, so listeners can take
//! snapshots (or mutate other fields) without deadlocking, and every
//! snapshot reflects a single atomic point in the container's history.

use std::sync::{Arc, Mutex};

use admin_types::AdminUser;
use auth_provider::AuthProvider;
use change_feed::{ChangeFeed, Subscription};
use tracing::debug;

use crate::state::AppState;

/// Configuration for constructing an [`AdminApp`].
pub struct AdminAppConfig {
    /// The authentication capability whose logged-user feed the container
    /// mirrors.
    pub auth_provider: Arc<dyn AuthProvider>,

    /// Optional seed state. The provider feed replays at construction, so
    /// the provider's current identity wins over a seeded `user` field.
    pub initial_state: Option<AppState>,
}

/// Observable state container for the current admin session.
///
/// The container is the sole writer of its state. Every setter is also a
/// broadcast point: listeners on the matching feed run synchronously, in
/// registration order, on the caller's thread.
pub struct AdminApp {
    state: Mutex<AppState>,
    user_feed: ChangeFeed<Option<AdminUser>>,
    message_feed: ChangeFeed<Option<String>>,
    notification_feed: ChangeFeed<Option<String>>,
    /// Held so the provider keeps delivering identity changes for the
    /// container's whole lifetime.
    provider_feed: Mutex<Option<Subscription>>,
}

impl AdminApp {
    fn with_state(initial: AppState) -> Self {
        Self {
            state: Mutex::new(initial),
            user_feed: ChangeFeed::new(),
            message_feed: ChangeFeed::new(),
            notification_feed: ChangeFeed::new(),
            provider_feed: Mutex::new(None),
        }
    }

    /// Replaces the current user and notifies user listeners.
    pub fn set_user(&self, user: Option<AdminUser>) {
        {
            let mut state = self.state.lock().expect("lock poisoned");
            state.user = user.clone();
        }
        debug!(logged_in = user.is_some(), "admin app: user replaced");
        self.user_feed.notify(&user);
    }

    /// Replaces the warning message and notifies message listeners.
    ///
    /// The notification field is left untouched.
    pub fn set_warning_message(&self, message: Option<String>) {
        {
            let mut state = self.state.lock().expect("lock poisoned");
            state.warning_message = message.clone();
        }
        self.message_feed.notify(&message);
    }

    /// Replaces the notification and notifies notification listeners.
    ///
    /// The warning message field is left untouched.
    pub fn set_notification(&self, message: Option<String>) {
        {
            let mut state = self.state.lock().expect("lock poisoned");
            state.notification = message.clone();
        }
        self.notification_feed.notify(&message);
    }

    /// Subscribes to future user changes.
    ///
    /// Does not replay the current value; that asymmetry with the provider
    /// feed is deliberate.
    pub fn on_user_change(
        &self,
        listener: impl Fn(&Option<AdminUser>) + Send + Sync + 'static,
    ) -> Subscription {
        self.user_feed.subscribe(listener)
    }

    /// Subscribes to future warning message changes.
    pub fn on_message_change(
        &self,
        listener: impl Fn(&Option<String>) + Send + Sync + 'static,
    ) -> Subscription {
        self.message_feed.subscribe(listener)
    }

    /// Subscribes to future notification changes.
    pub fn on_notification_change(
        &self,
        listener: impl Fn(&Option<String>) + Send + Sync + 'static,
    ) -> Subscription {
        self.notification_feed.subscribe(listener)
    }

    /// Returns an atomic snapshot of the current state.
    ///
    /// One lock acquisition, one clone: the returned value never mixes
    /// fields from two different setter calls.
    pub fn state(&self) -> AppState {
        self.state.lock().expect("lock poisoned").clone()
    }
}

impl std::fmt::Debug for AdminApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminApp")
            .field("state", &self.state.lock().expect("lock poisoned"))
            .finish()
    }
}

/// Constructs an [`AdminApp`] wired to its authentication provider.
///
/// The container subscribes to the provider's logged-user feed and forwards
/// every emitted identity into [`AdminApp::set_user`]. Because that feed
/// replays at registration, the provider's current identity lands in the
/// container before this function returns — a pre-existing session is
/// resumed without any flow running.
pub fn configure_admin_app(config: AdminAppConfig) -> Arc<AdminApp> {
    let app = Arc::new(AdminApp::with_state(config.initial_state.unwrap_or_default()));

    let mirror = Arc::downgrade(&app);
    let subscription = config
        .auth_provider
        .on_logged_user_change(Box::new(move |user| {
            if let Some(app) = mirror.upgrade() {
                app.set_user(user.clone());
            }
        }));
    *app.provider_feed.lock().expect("lock poisoned") = Some(subscription);

    debug!("admin app: configured");
    app
}
