//! Screen-level state for the presentation layer.
//!
//! This module contains the screens that compose the sync controllers:
//! - [`ProfileScreen`] - profile header plus own posts / liked posts list
//! - [`HomeScreen`] - every listing, newest first
//! - [`ScreenView`] / [`HomeView`] - read-only snapshots for rendering
//! - [`ScreenEvent`] - what handling a completion changed
//!
//! Triggers (`on_mounted`, `on_mode_changed`, `on_refresh_requested`) map
//! one-to-one onto loader calls. Loads run as spawned tasks and report back
//! through the screen's message channel; the owner pumps that channel with
//! [`ProfileScreen::next_message`] and [`ProfileScreen::handle_message`], or
//! with [`ProfileScreen::settle`].

mod handlers;
mod home;
mod view;

pub use home::HomeScreen;
pub use view::{HomeView, ScreenEvent, ScreenView};

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::error::{SyncError, SyncResult};
use crate::models::{UserId, ViewMode};
use crate::sync::{FeedController, LoadSource, ProfileState, RefreshCoordinator, SyncMessage};
use crate::traits::{RemoteStore, SessionProvider};

/// The profile screen: header, view-mode tabs and a post list.
pub struct ProfileScreen {
    session: Arc<dyn SessionProvider>,
    profile: ProfileState,
    feed: FeedController,
    refresh: RefreshCoordinator,
    last_error: Option<SyncError>,
    message_rx: mpsc::UnboundedReceiver<SyncMessage>,
}

impl ProfileScreen {
    pub fn new(store: Arc<dyn RemoteStore>, session: Arc<dyn SessionProvider>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            session,
            profile: ProfileState::new(Arc::clone(&store), message_tx.clone()),
            feed: FeedController::new(store, message_tx),
            refresh: RefreshCoordinator::new(),
            last_error: None,
            message_rx,
        }
    }

    /// Initial load when the screen opens: profile plus own posts.
    pub fn on_mounted(&mut self) -> SyncResult<()> {
        let user_id = self.require_user()?;
        self.last_error = None;
        self.profile.reload(user_id);
        self.feed.set_mode(user_id, ViewMode::Posts);
        Ok(())
    }

    /// The user picked a tab.
    ///
    /// Returns `Ok(false)` when ignored because a refresh is in progress.
    pub fn on_mode_changed(&mut self, mode: ViewMode) -> SyncResult<bool> {
        if self.refresh.is_refreshing() {
            tracing::debug!(%mode, "list interaction suspended during refresh");
            return Ok(false);
        }
        let user_id = self.require_user()?;
        self.last_error = None;
        self.feed.set_mode(user_id, mode);
        Ok(true)
    }

    /// The user pulled to refresh.
    ///
    /// Returns `Ok(false)` when a refresh is already running.
    pub fn on_refresh_requested(&mut self) -> SyncResult<bool> {
        if !self.refresh.begin() {
            return Ok(false);
        }
        let user_id = match self.require_user() {
            Ok(user_id) => user_id,
            Err(err) => {
                self.refresh.finish();
                return Err(err);
            }
        };

        self.last_error = None;
        let profile_generation = self.profile.reload(user_id);
        let feed_generation = self.feed.set_mode(user_id, ViewMode::Posts);
        self.refresh.track(LoadSource::Profile, profile_generation);
        self.refresh.track(LoadSource::Feed, feed_generation);
        Ok(true)
    }

    /// Wait for the next completion from a load task.
    pub async fn next_message(&mut self) -> Option<SyncMessage> {
        self.message_rx.recv().await
    }

    /// True when no current load is outstanding and no refresh is running.
    ///
    /// Superseded loads may still be in flight; their results will be
    /// discarded whenever they arrive.
    pub fn is_settled(&self) -> bool {
        !self.profile.is_loading() && !self.feed.is_loading() && !self.refresh.is_refreshing()
    }

    /// Handle completions until the screen is settled.
    pub async fn settle(&mut self) -> Vec<ScreenEvent> {
        let mut events = Vec::new();
        while !self.is_settled() {
            match self.message_rx.recv().await {
                Some(msg) => events.extend(self.handle_message(msg)),
                None => break,
            }
        }
        events
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> ScreenView<'_> {
        ScreenView {
            profile: self.profile.snapshot(),
            mode: self.feed.mode(),
            posts: self.feed.display_list(),
            loading: self.profile.is_loading() || self.feed.is_loading(),
            refreshing: self.refresh.flag(),
            error: self.last_error.as_ref(),
        }
    }

    fn require_user(&mut self) -> SyncResult<UserId> {
        match self.session.current_user_id() {
            Some(user_id) => Ok(user_id),
            None => {
                tracing::warn!("trigger without a signed-in user");
                self.last_error = Some(SyncError::NoSession);
                Err(SyncError::NoSession)
            }
        }
    }
}
