//! Remote data store trait abstraction.
//!
//! The sync core only ever reads through these five query shapes, which keeps
//! the backend swappable and lets tests control what each query returns and
//! when it completes.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{LikeSet, Post, PostId, Profile, UserId};

/// Read-side queries against the hosted backend.
///
/// Every list query returns posts ordered by `inserted_at` descending.
///
/// # Example
///
/// ```ignore
/// use nusell::traits::RemoteStore;
///
/// async fn newest_title<S: RemoteStore>(store: &S, user: UserId) -> Option<String> {
///     let posts = store.list_posts_by_owner(user).await.ok()?;
///     posts.first().map(|p| p.title.clone())
/// }
/// ```
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Fetch the single profile row for `user_id`.
    ///
    /// Returns `StoreError::NotFound` when no row exists.
    async fn get_profile(&self, user_id: UserId) -> Result<Profile, StoreError>;

    /// Posts owned by `user_id`, most recent first.
    async fn list_posts_by_owner(&self, user_id: UserId) -> Result<Vec<Post>, StoreError>;

    /// The user's liked post ids. A user with no like row has an empty set.
    async fn get_like_set(&self, user_id: UserId) -> Result<LikeSet, StoreError>;

    /// Posts whose id is in `ids`, most recent first.
    ///
    /// Callers must not pass an empty slice; an `in.()` filter with no members
    /// is not a valid query on every backend.
    async fn list_posts_by_ids(&self, ids: &[PostId]) -> Result<Vec<Post>, StoreError>;

    /// Every post, most recent first (home feed).
    async fn list_recent_posts(&self) -> Result<Vec<Post>, StoreError>;
}
