//! Profile screen list: own posts or liked posts.
//!
//! The controller owns the view mode and the display list. Each trigger
//! dispatches a background load stamped with a fresh generation; completions
//! come back as [`SyncMessage::FeedLoaded`] and replace the list only when
//! they belong to the latest trigger.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::error::{LoadOperation, SyncError, SyncResult};
use crate::models::{sort_recent_first, Post, UserId, ViewMode};
use crate::traits::RemoteStore;

use super::generation::{Generation, LoadGuard};
use super::likes::LikesResolver;
use super::messages::{ApplyOutcome, SyncMessage};

/// Picks and runs the query for a view mode.
#[derive(Clone)]
pub struct FeedLoader {
    store: Arc<dyn RemoteStore>,
    likes: LikesResolver,
}

impl FeedLoader {
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self {
            likes: LikesResolver::new(Arc::clone(&store)),
            store,
        }
    }

    /// Posts to display for `mode`, newest first.
    pub async fn load_for_mode(&self, user_id: UserId, mode: ViewMode) -> SyncResult<Vec<Post>> {
        match mode {
            ViewMode::Posts => {
                let mut posts = self
                    .store
                    .list_posts_by_owner(user_id)
                    .await
                    .map_err(|e| SyncError::from_store(LoadOperation::OwnPosts, user_id, e))?;
                sort_recent_first(&mut posts);
                Ok(posts)
            }
            ViewMode::Likes => self.likes.resolve(user_id).await,
        }
    }
}

/// Owns the view mode and display list of one screen.
pub struct FeedController {
    loader: FeedLoader,
    mode: ViewMode,
    display: Vec<Post>,
    guard: LoadGuard,
    message_tx: mpsc::UnboundedSender<SyncMessage>,
}

impl FeedController {
    pub fn new(store: Arc<dyn RemoteStore>, message_tx: mpsc::UnboundedSender<SyncMessage>) -> Self {
        Self {
            loader: FeedLoader::new(store),
            mode: ViewMode::default(),
            display: Vec::new(),
            guard: LoadGuard::new(),
            message_tx,
        }
    }

    /// Switch to `mode` and load its list.
    ///
    /// Any load still outstanding for the previous mode becomes stale.
    pub fn set_mode(&mut self, user_id: UserId, mode: ViewMode) -> Generation {
        if mode != self.mode {
            tracing::info!(from = %self.mode, to = %mode, "view mode changed");
        }
        self.mode = mode;
        self.dispatch(user_id)
    }

    /// Reload the list for the current mode.
    pub fn refresh(&mut self, user_id: UserId) -> Generation {
        self.dispatch(user_id)
    }

    fn dispatch(&mut self, user_id: UserId) -> Generation {
        let generation = self.guard.issue();
        let mode = self.mode;
        let loader = self.loader.clone();
        let message_tx = self.message_tx.clone();
        tracing::debug!(%user_id, %mode, %generation, "dispatching feed load");

        tokio::spawn(async move {
            let result = loader.load_for_mode(user_id, mode).await;
            let _ = message_tx.send(SyncMessage::FeedLoaded {
                generation,
                mode,
                result,
            });
        });

        generation
    }

    /// Apply a completed load if it belongs to the latest trigger.
    ///
    /// Success replaces the display list in one assignment; failure leaves
    /// it untouched.
    pub fn apply(
        &mut self,
        generation: Generation,
        mode: ViewMode,
        result: SyncResult<Vec<Post>>,
    ) -> ApplyOutcome {
        if !self.guard.settle(generation) {
            tracing::debug!(%generation, %mode, "discarding stale feed load");
            return ApplyOutcome::Discarded;
        }

        match result {
            Ok(posts) => {
                tracing::info!(%mode, count = posts.len(), "feed loaded");
                self.display = posts;
                ApplyOutcome::Applied
            }
            Err(err) => {
                tracing::warn!(%mode, code = err.error_code(), "feed load failed: {}", err);
                ApplyOutcome::Failed(err)
            }
        }
    }

    /// Set the mode without loading; used for the post-refresh reset.
    pub fn reset_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn display_list(&self) -> &[Post] {
        &self.display
    }

    pub fn is_loading(&self) -> bool {
        self.guard.is_loading()
    }

    pub fn loader(&self) -> &FeedLoader {
        &self.loader
    }
}
