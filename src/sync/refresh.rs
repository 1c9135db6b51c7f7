//! Pull-to-refresh lifecycle.
//!
//! `Idle -> Refreshing -> Idle`. A pull from `Idle` raises the refresh flag
//! and the screen dispatches its reloads, registering each with
//! [`RefreshCoordinator::track`]. Every tracked load must settle (applied,
//! failed or discarded) before the coordinator returns to `Idle`, so a
//! refresh always terminates. Pulls while refreshing are ignored.

use std::collections::HashSet;

use super::generation::Generation;

/// Which controller a tracked load belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadSource {
    Profile,
    Feed,
    RecentPosts,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RefreshState {
    #[default]
    Idle,
    Refreshing {
        pending: HashSet<(LoadSource, Generation)>,
    },
}

/// Refresh state machine for one screen.
#[derive(Debug, Default)]
pub struct RefreshCoordinator {
    state: RefreshState,
}

impl RefreshCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a pull gesture. Returns false (no-op) when already refreshing.
    pub fn begin(&mut self) -> bool {
        if self.is_refreshing() {
            tracing::debug!("refresh already in progress, ignoring pull");
            return false;
        }
        tracing::info!("refresh started");
        self.state = RefreshState::Refreshing {
            pending: HashSet::new(),
        };
        true
    }

    /// Register a load the current refresh must wait for.
    pub fn track(&mut self, source: LoadSource, generation: Generation) {
        if let RefreshState::Refreshing { pending } = &mut self.state {
            pending.insert((source, generation));
        }
    }

    /// Note that a load settled. Returns true if this completed the refresh.
    pub fn settle(&mut self, source: LoadSource, generation: Generation) -> bool {
        let RefreshState::Refreshing { pending } = &mut self.state else {
            return false;
        };
        if !pending.remove(&(source, generation)) || !pending.is_empty() {
            return false;
        }
        self.finish();
        true
    }

    /// Return to `Idle` unconditionally, e.g. when nothing could be dispatched.
    pub fn finish(&mut self) {
        if self.is_refreshing() {
            tracing::info!("refresh finished");
        }
        self.state = RefreshState::Idle;
    }

    pub fn is_refreshing(&self) -> bool {
        matches!(self.state, RefreshState::Refreshing { .. })
    }

    /// The refresh flag the list's spinner is bound to.
    pub fn flag(&self) -> bool {
        self.is_refreshing()
    }

    pub fn state(&self) -> &RefreshState {
        &self.state
    }
}
