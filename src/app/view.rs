//! Read-only snapshots handed to the presentation layer.

use crate::error::SyncError;
use crate::models::{Post, Profile, ViewMode};

/// Everything the profile screen renders, borrowed from the screen.
#[derive(Debug, Clone, Copy)]
pub struct ScreenView<'a> {
    pub profile: Option<&'a Profile>,
    pub mode: ViewMode,
    pub posts: &'a [Post],
    /// True while the latest profile or list load is outstanding
    pub loading: bool,
    /// The pull-to-refresh spinner
    pub refreshing: bool,
    pub error: Option<&'a SyncError>,
}

/// Everything the home page renders.
#[derive(Debug, Clone, Copy)]
pub struct HomeView<'a> {
    pub posts: &'a [Post],
    pub loading: bool,
    pub refreshing: bool,
    pub error: Option<&'a SyncError>,
}

/// Notable state changes produced by handling a completion message.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenEvent {
    /// A new profile snapshot replaced the old one
    ProfileUpdated,
    /// The display list was replaced
    FeedUpdated { mode: ViewMode, count: usize },
    /// The home feed was replaced
    HomeUpdated { count: usize },
    /// The refresh cycle returned to idle
    RefreshFinished,
    /// A load failed; previous state is still shown
    Error(SyncError),
}
