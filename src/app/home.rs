//! Home page screen.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::error::SyncError;
use crate::sync::{ApplyOutcome, HomeFeed, LoadSource, RefreshCoordinator, SyncMessage};
use crate::traits::RemoteStore;

use super::{HomeView, ScreenEvent};

/// Every listing, newest first, with pull-to-refresh.
pub struct HomeScreen {
    feed: HomeFeed,
    refresh: RefreshCoordinator,
    last_error: Option<SyncError>,
    message_rx: mpsc::UnboundedReceiver<SyncMessage>,
}

impl HomeScreen {
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            feed: HomeFeed::new(store, message_tx),
            refresh: RefreshCoordinator::new(),
            last_error: None,
            message_rx,
        }
    }

    pub fn on_mounted(&mut self) {
        self.last_error = None;
        self.feed.reload();
    }

    /// Returns false when a refresh is already running.
    pub fn on_refresh_requested(&mut self) -> bool {
        if !self.refresh.begin() {
            return false;
        }
        self.last_error = None;
        let generation = self.feed.reload();
        self.refresh.track(LoadSource::RecentPosts, generation);
        true
    }

    pub async fn next_message(&mut self) -> Option<SyncMessage> {
        self.message_rx.recv().await
    }

    pub fn handle_message(&mut self, msg: SyncMessage) -> Vec<ScreenEvent> {
        let mut events = Vec::new();
        let SyncMessage::RecentPostsLoaded { generation, result } = msg else {
            tracing::debug!("home screen ignoring profile screen completion");
            return events;
        };

        match self.feed.apply(generation, result) {
            ApplyOutcome::Applied => events.push(ScreenEvent::HomeUpdated {
                count: self.feed.posts().len(),
            }),
            ApplyOutcome::Failed(err) => {
                self.last_error = Some(err.clone());
                events.push(ScreenEvent::Error(err));
            }
            ApplyOutcome::Discarded => {}
        }
        if self.refresh.settle(LoadSource::RecentPosts, generation) {
            events.push(ScreenEvent::RefreshFinished);
        }
        events
    }

    pub fn is_settled(&self) -> bool {
        !self.feed.is_loading() && !self.refresh.is_refreshing()
    }

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

    pub fn view(&self) -> HomeView<'_> {
        HomeView {
            posts: self.feed.posts(),
            loading: self.feed.is_loading(),
            refreshing: self.refresh.flag(),
            error: self.last_error.as_ref(),
        }
    }
}
