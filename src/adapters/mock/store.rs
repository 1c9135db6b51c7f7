//! In-memory remote data store for testing.
//!
//! Serves queries from in-memory tables, records every call, can fail a
//! query kind on demand and can hold a query kind until the test releases
//! it. Holding is how tests force an earlier-dispatched load to finish after
//! a later one.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

use crate::error::StoreError;
use crate::models::{sort_recent_first, LikeSet, Post, PostId, Profile, UserId};
use crate::traits::RemoteStore;

/// The five query shapes of [`RemoteStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    GetProfile,
    PostsByOwner,
    LikeSet,
    PostsByIds,
    RecentPosts,
}

/// A recorded query for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedQuery {
    pub kind: QueryKind,
    pub user_id: Option<UserId>,
    pub ids: Vec<PostId>,
}

#[derive(Debug, Default)]
struct Tables {
    profiles: HashMap<UserId, Profile>,
    posts: Vec<Post>,
    likes: HashMap<UserId, LikeSet>,
}

/// Mock remote data store.
///
/// # Example
///
/// ```ignore
/// use nusell::adapters::mock::{MockStore, QueryKind};
///
/// let store = MockStore::new();
/// store.insert_post(post);
/// store.hold(QueryKind::LikeSet);
/// // ... dispatch a likes load, it now waits ...
/// store.release(QueryKind::LikeSet);
/// assert_eq!(store.call_count(QueryKind::PostsByIds), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockStore {
    tables: Arc<Mutex<Tables>>,
    failures: Arc<Mutex<HashMap<QueryKind, StoreError>>>,
    holds: Arc<Mutex<HashMap<QueryKind, Arc<Semaphore>>>>,
    calls: Arc<Mutex<Vec<RecordedQuery>>>,
}

impl MockStore {
    /// Create an empty mock store.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_profile(&self, profile: Profile) {
        let mut tables = self.tables.lock().unwrap();
        tables.profiles.insert(profile.user_id, profile);
    }

    pub fn insert_post(&self, post: Post) {
        let mut tables = self.tables.lock().unwrap();
        tables.posts.retain(|p| p.id != post.id);
        tables.posts.push(post);
    }

    pub fn set_likes(&self, user_id: UserId, post_ids: Vec<PostId>) {
        let mut tables = self.tables.lock().unwrap();
        tables.likes.insert(user_id, LikeSet::new(post_ids));
    }

    /// Make every query of `kind` fail with `err` until cleared.
    pub fn fail(&self, kind: QueryKind, err: StoreError) {
        self.failures.lock().unwrap().insert(kind, err);
    }

    pub fn clear_failure(&self, kind: QueryKind) {
        self.failures.lock().unwrap().remove(&kind);
    }

    /// Make queries of `kind` wait until released.
    pub fn hold(&self, kind: QueryKind) {
        self.holds
            .lock()
            .unwrap()
            .insert(kind, Arc::new(Semaphore::new(0)));
    }

    /// Let one waiting (or the next) query of `kind` through.
    pub fn release(&self, kind: QueryKind) {
        if let Some(gate) = self.holds.lock().unwrap().get(&kind) {
            gate.add_permits(1);
        }
    }

    /// Stop holding `kind` and let every waiting query through.
    pub fn release_all(&self, kind: QueryKind) {
        if let Some(gate) = self.holds.lock().unwrap().remove(&kind) {
            gate.close();
        }
    }

    /// Get all recorded queries.
    pub fn calls(&self) -> Vec<RecordedQuery> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, kind: QueryKind) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.kind == kind)
            .count()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Record the call, wait for any hold, then report an injected failure.
    async fn enter(
        &self,
        kind: QueryKind,
        user_id: Option<UserId>,
        ids: &[PostId],
    ) -> Result<(), StoreError> {
        self.calls.lock().unwrap().push(RecordedQuery {
            kind,
            user_id,
            ids: ids.to_vec(),
        });

        let gate = self.holds.lock().unwrap().get(&kind).cloned();
        if let Some(gate) = gate {
            // A closed gate means the hold was lifted
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }

        match self.failures.lock().unwrap().get(&kind) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn recent_first(mut posts: Vec<Post>) -> Vec<Post> {
        sort_recent_first(&mut posts);
        posts
    }
}

#[async_trait]
impl RemoteStore for MockStore {
    async fn get_profile(&self, user_id: UserId) -> Result<Profile, StoreError> {
        self.enter(QueryKind::GetProfile, Some(user_id), &[]).await?;
        let tables = self.tables.lock().unwrap();
        tables
            .profiles
            .get(&user_id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(format!("profile {}", user_id)))
    }

    async fn list_posts_by_owner(&self, user_id: UserId) -> Result<Vec<Post>, StoreError> {
        self.enter(QueryKind::PostsByOwner, Some(user_id), &[]).await?;
        let tables = self.tables.lock().unwrap();
        let owned = tables
            .posts
            .iter()
            .filter(|p| p.owner_id == user_id)
            .cloned()
            .collect();
        Ok(Self::recent_first(owned))
    }

    async fn get_like_set(&self, user_id: UserId) -> Result<LikeSet, StoreError> {
        self.enter(QueryKind::LikeSet, Some(user_id), &[]).await?;
        let tables = self.tables.lock().unwrap();
        Ok(tables.likes.get(&user_id).cloned().unwrap_or_default())
    }

    async fn list_posts_by_ids(&self, ids: &[PostId]) -> Result<Vec<Post>, StoreError> {
        self.enter(QueryKind::PostsByIds, None, ids).await?;
        let tables = self.tables.lock().unwrap();
        let matching = tables
            .posts
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect();
        Ok(Self::recent_first(matching))
    }

    async fn list_recent_posts(&self) -> Result<Vec<Post>, StoreError> {
        self.enter(QueryKind::RecentPosts, None, &[]).await?;
        let tables = self.tables.lock().unwrap();
        Ok(Self::recent_first(tables.posts.clone()))
    }
}
