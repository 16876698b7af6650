//! Read-side selectors.
//!
//! Selectors are queries: they never change state, they only answer a
//! question about the most recent snapshot.

use admin_types::AdminUser;

use crate::app::AdminApp;

/// Returns the currently logged-in user, if any.
pub fn select_user(app: &AdminApp) -> Option<AdminUser> {
    app.state().user
}

/// Returns the last-set warning message, if any.
pub fn select_warning_message(app: &AdminApp) -> Option<String> {
    app.state().warning_message
}

/// Returns the last-set notification, if any.
pub fn select_notification(app: &AdminApp) -> Option<String> {
    app.state().notification
}
