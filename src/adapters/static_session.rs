//! Fixed-user session provider.

use crate::models::UserId;
use crate::traits::SessionProvider;

/// Environment variable naming the user the CLI acts as.
pub const ENV_USER_ID: &str = "NUSELL_USER_ID";

/// Session provider for a user id known up front (CLI, scripts).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticSession {
    user_id: Option<UserId>,
}

impl StaticSession {
    pub fn new(user_id: Option<UserId>) -> Self {
        Self { user_id }
    }

    /// Read the user id from `NUSELL_USER_ID`.
    ///
    /// A missing or unparsable value yields a signed-out session.
    pub fn from_env() -> Self {
        let user_id = std::env::var(ENV_USER_ID)
            .ok()
            .and_then(|raw| raw.trim().parse::<UserId>().ok());
        if user_id.is_none() {
            tracing::debug!("{} not set or invalid; session is signed out", ENV_USER_ID);
        }
        Self { user_id }
    }
}

impl SessionProvider for StaticSession {
    fn current_user_id(&self) -> Option<UserId> {
        self.user_id
    }
}
