//! Completion messages sent from load tasks back to their screen.

use crate::error::SyncResult;
use crate::models::{Post, Profile, ViewMode};

use super::generation::Generation;

/// A load finished. Applied only if `generation` is still current.
#[derive(Debug, Clone)]
pub enum SyncMessage {
    /// Profile row loaded (or failed)
    ProfileLoaded {
        generation: Generation,
        result: SyncResult<Profile>,
    },
    /// Feed list for `mode` loaded (or failed)
    FeedLoaded {
        generation: Generation,
        mode: ViewMode,
        result: SyncResult<Vec<Post>>,
    },
    /// Home feed loaded (or failed)
    RecentPostsLoaded {
        generation: Generation,
        result: SyncResult<Vec<Post>>,
    },
}

impl SyncMessage {
    pub fn generation(&self) -> Generation {
        match self {
            SyncMessage::ProfileLoaded { generation, .. }
            | SyncMessage::FeedLoaded { generation, .. }
            | SyncMessage::RecentPostsLoaded { generation, .. } => *generation,
        }
    }

    /// View mode a feed load was dispatched for.
    pub fn mode(&self) -> Option<ViewMode> {
        match self {
            SyncMessage::FeedLoaded { mode, .. } => Some(*mode),
            _ => None,
        }
    }

    pub fn is_ok(&self) -> bool {
        match self {
            SyncMessage::ProfileLoaded { result, .. } => result.is_ok(),
            SyncMessage::FeedLoaded { result, .. }
            | SyncMessage::RecentPostsLoaded { result, .. } => result.is_ok(),
        }
    }
}

/// What applying a completion did to the owning state.
#[derive(Debug, Clone, PartialEq)]
pub enum ApplyOutcome {
    /// The result replaced the previous state
    Applied,
    /// The load failed; previous state kept
    Failed(crate::error::SyncError),
    /// A newer load was dispatched since; result dropped
    Discarded,
}
