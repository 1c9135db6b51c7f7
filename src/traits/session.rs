//! Session provider trait abstraction.

use crate::models::UserId;

/// Exposes who is signed in, and nothing else.
///
/// Sign-in, sign-out and token refresh belong to the authentication
/// provider; the sync core only needs the current user's id at the moment a
/// load is triggered.
pub trait SessionProvider: Send + Sync {
    /// The signed-in user's id, or `None` when signed out.
    fn current_user_id(&self) -> Option<UserId>;
}
