//! Application state value.

use admin_types::AdminUser;
use serde::{Deserialize, Serialize};

/// A snapshot of the admin console session state.
///
/// `user` is `None` exactly when no session is established. The message
/// fields each hold the last value set for their channel; setting one never
/// clears the other.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub user: Option<AdminUser>,
    pub warning_message: Option<String>,
    pub notification: Option<String>,
}
