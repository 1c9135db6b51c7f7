//! Switchable session provider for testing.

use std::sync::{Arc, Mutex};

use crate::models::UserId;
use crate::traits::SessionProvider;

/// Session provider whose signed-in user can be changed mid-test.
#[derive(Debug, Clone, Default)]
pub struct MockSession {
    user_id: Arc<Mutex<Option<UserId>>>,
}

impl MockSession {
    /// Create a session signed in as `user_id`.
    pub fn signed_in(user_id: UserId) -> Self {
        Self {
            user_id: Arc::new(Mutex::new(Some(user_id))),
        }
    }

    /// Create a signed-out session.
    pub fn signed_out() -> Self {
        Self::default()
    }

    pub fn sign_in(&self, user_id: UserId) {
        *self.user_id.lock().unwrap() = Some(user_id);
    }

    pub fn sign_out(&self) {
        *self.user_id.lock().unwrap() = None;
    }
}

impl SessionProvider for MockSession {
    fn current_user_id(&self) -> Option<UserId> {
        *self.user_id.lock().unwrap()
    }
}
