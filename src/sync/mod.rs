//! Per-view content synchronization.
//!
//! Controllers own view state and dispatch background loads; loads report
//! back through [`SyncMessage`] and are applied under a generation guard so
//! that the latest-initiated load always wins.
//!
//! - [`FeedController`] - view mode and display list (own posts / likes)
//! - [`LikesResolver`] - like set to posts, two-stage
//! - [`ProfileState`] / [`ProfileLoader`] - profile header snapshot
//! - [`RefreshCoordinator`] - pull-to-refresh lifecycle
//! - [`HomeFeed`] - home page list of every post

pub mod feed;
pub mod generation;
pub mod home;
pub mod likes;
pub mod messages;
pub mod profile;
pub mod refresh;

pub use feed::{FeedController, FeedLoader};
pub use generation::{Generation, LoadGuard};
pub use home::HomeFeed;
pub use likes::{LikedPosts, LikesResolver};
pub use messages::{ApplyOutcome, SyncMessage};
pub use profile::{ProfileLoader, ProfileState};
pub use refresh::{LoadSource, RefreshCoordinator, RefreshState};
