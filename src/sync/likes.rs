//! Liked-post lookup.
//!
//! Likes are stored apart from posts (one row per user holding an id array),
//! so resolving them is a two-stage pipeline: fetch the id set, then fetch
//! the posts. An empty set ends the pipeline before the second query.

use std::sync::Arc;

use crate::error::{LoadOperation, SyncError, SyncResult};
use crate::models::{sort_recent_first, Post, UserId};
use crate::traits::RemoteStore;

/// Result of the first stage, carried through the second.
#[derive(Debug, Clone, PartialEq)]
pub enum LikedPosts {
    /// The user has liked nothing; no post query was issued.
    NoLikes,
    /// Posts matching the like set, most recent first.
    Resolved(Vec<Post>),
}

impl LikedPosts {
    pub fn into_posts(self) -> Vec<Post> {
        match self {
            LikedPosts::NoLikes => Vec::new(),
            LikedPosts::Resolved(posts) => posts,
        }
    }
}

/// Joins a user's like set to post records.
#[derive(Clone)]
pub struct LikesResolver {
    store: Arc<dyn RemoteStore>,
}

impl LikesResolver {
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self { store }
    }

    /// Liked posts for `user_id`, ordered by insertion time, newest first.
    pub async fn resolve(&self, user_id: UserId) -> SyncResult<Vec<Post>> {
        Ok(self.lookup(user_id).await?.into_posts())
    }

    /// Run the pipeline, keeping the empty-set branch visible to the caller.
    ///
    /// A failure in either stage is returned as is; nothing partial escapes.
    pub async fn lookup(&self, user_id: UserId) -> SyncResult<LikedPosts> {
        let like_set = self
            .store
            .get_like_set(user_id)
            .await
            .map_err(|e| SyncError::from_store(LoadOperation::LikeSet, user_id, e))?;

        if like_set.is_empty() {
            tracing::debug!(%user_id, "like set empty, skipping post lookup");
            return Ok(LikedPosts::NoLikes);
        }

        let mut posts = self
            .store
            .list_posts_by_ids(&like_set.post_ids)
            .await
            .map_err(|e| SyncError::from_store(LoadOperation::LikedPosts, user_id, e))?;

        // Like-set order is meaningless; the feed contract is recency
        sort_recent_first(&mut posts);
        tracing::debug!(
            %user_id,
            liked = like_set.len(),
            resolved = posts.len(),
            "resolved liked posts"
        );
        Ok(LikedPosts::Resolved(posts))
    }
}
