//! Flow tests for the auth orchestrator.
//!
//! - `sign_in.rs`  - valid, rejected, and offline sign-in scenarios
//! - `sign_out.rs` - successful and offline sign-out scenarios


use std::sync::Arc;

use admin_app::{configure_admin_app, AdminApp, AdminAppConfig};
use admin_types::{AdminUser, Credentials};
use auth_provider::{AdminAccount, FakeAuthProvider, FakeAuthProviderConfig};

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

pub(crate) fn valid_credentials() -> Credentials {
    Credentials::new("ana@example.com", "ana-pass")
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

#[test]
fn outcome_codes() {
    assert_eq!(crate::Outcome::Ok.as_str(), "ok");
    assert_eq!(crate::Outcome::Fail.as_str(), "fail");
}
