//! Integration tests for the admin app container.
//!
//! Organized by concern:
//!
//! - `snapshot.rs`      - atomic snapshot reads and field independence
//! - `subscriptions.rs` - feed dispatch, ordering, unsubscribe, isolation
//! - `mirror.rs`        - provider feed mirroring and session resume

mod subscriptions;

use std::sync::Arc;

use admin_types::{AdminUser, Credentials};
use auth_provider::{AdminAccount, FakeAuthProvider, FakeAuthProviderConfig};

use crate::{configure_admin_app, select_user, AdminApp, AdminAppConfig};

pub(crate) fn account(uid: &str, email: &str, password: &str) -> AdminAccount {
    AdminAccount {
        user: AdminUser::new(
            uid,
            format!("user-{uid}"),
            email,
            format!("https://avatars.example.com/{uid}.png"),
        ),
        credentials: Credentials::new(email, password),
        id: format!("account-{uid}"),
    }
}

pub(crate) fn directory() -> Vec<AdminAccount> {
    vec![
        account("u1", "ana@example.com", "ana-pass"),
        account("u2", "bruno@example.com", "bruno-pass"),
    ]
}

pub(crate) fn provider(
    offline: bool,
    logged_in_as: Option<Credentials>,
) -> Arc<FakeAuthProvider> {
    Arc::new(FakeAuthProvider::new(FakeAuthProviderConfig {
        accounts: directory(),
        offline,
        logged_in_as,
    }))
}

pub(crate) fn app_with(provider: &Arc<FakeAuthProvider>) -> Arc<AdminApp> {
    configure_admin_app(AdminAppConfig {
        auth_provider: provider.clone(),
        initial_state: None,
    })
}

/// Basic workflow: construct, mutate, observe.
#[test]
fn basic_workflow() {
    let provider = provider(false, None);
    let app = app_with(&provider);

    assert!(select_user(&app).is_none());

    app.set_warning_message(Some("check your input".to_string()));
    app.set_notification(Some("saved".to_string()));

    let state = app.state();
    assert_eq!(state.warning_message.as_deref(), Some("check your input"));
    assert_eq!(state.notification.as_deref(), Some("saved"));
    assert!(state.user.is_none());
}
