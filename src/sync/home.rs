//! Home page feed: every listing, newest first.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::error::{LoadOperation, SyncError, SyncResult};
use crate::models::{sort_recent_first, Post};
use crate::traits::RemoteStore;

use super::generation::{Generation, LoadGuard};
use super::messages::{ApplyOutcome, SyncMessage};

pub struct HomeFeed {
    store: Arc<dyn RemoteStore>,
    posts: Vec<Post>,
    guard: LoadGuard,
    message_tx: mpsc::UnboundedSender<SyncMessage>,
}

impl HomeFeed {
    pub fn new(store: Arc<dyn RemoteStore>, message_tx: mpsc::UnboundedSender<SyncMessage>) -> Self {
        Self {
            store,
            posts: Vec::new(),
            guard: LoadGuard::new(),
            message_tx,
        }
    }

    pub async fn load(store: &dyn RemoteStore) -> SyncResult<Vec<Post>> {
        let mut posts = store.list_recent_posts().await.map_err(|e| {
            // The home feed is not tied to a user; nil keeps the error shape uniform
            SyncError::from_store(LoadOperation::RecentPosts, uuid::Uuid::nil(), e)
        })?;
        sort_recent_first(&mut posts);
        Ok(posts)
    }

    pub fn reload(&mut self) -> Generation {
        let generation = self.guard.issue();
        let store = Arc::clone(&self.store);
        let message_tx = self.message_tx.clone();
        tracing::debug!(%generation, "dispatching home feed load");

        tokio::spawn(async move {
            let result = Self::load(store.as_ref()).await;
            let _ = message_tx.send(SyncMessage::RecentPostsLoaded { generation, result });
        });

        generation
    }

    pub fn apply(&mut self, generation: Generation, result: SyncResult<Vec<Post>>) -> ApplyOutcome {
        if !self.guard.settle(generation) {
            tracing::debug!(%generation, "discarding stale home feed load");
            return ApplyOutcome::Discarded;
        }
        match result {
            Ok(posts) => {
                tracing::info!(count = posts.len(), "home feed loaded");
                self.posts = posts;
                ApplyOutcome::Applied
            }
            Err(err) => {
                tracing::warn!(code = err.error_code(), "home feed load failed: {}", err);
                ApplyOutcome::Failed(err)
            }
        }
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn is_loading(&self) -> bool {
        self.guard.is_loading()
    }
}
