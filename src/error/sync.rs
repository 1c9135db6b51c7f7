//! Errors surfaced by the sync core to the presentation layer.

use std::fmt;

use thiserror::Error;

use super::category::ErrorCategory;
use super::store::StoreError;
use crate::models::UserId;

/// The query a failed load was running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadOperation {
    Profile,
    OwnPosts,
    LikeSet,
    LikedPosts,
    RecentPosts,
}

impl LoadOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadOperation::Profile => "profile",
            LoadOperation::OwnPosts => "own posts",
            LoadOperation::LikeSet => "like set",
            LoadOperation::LikedPosts => "liked posts",
            LoadOperation::RecentPosts => "recent posts",
        }
    }
}

impl fmt::Display for LoadOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed load, as reported to the screen.
///
/// Every variant leaves previously displayed state intact; the screen only
/// adds an error indicator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// No profile row exists for the user.
    #[error("profile for user {user_id} not found")]
    NotFound { user_id: UserId },

    /// The backend was unreachable or failed.
    #[error("transport error while loading {operation}: {message}")]
    Transport {
        operation: LoadOperation,
        message: String,
    },

    /// Any other query failure.
    #[error("failed to load {operation}: {message}")]
    Load {
        operation: LoadOperation,
        message: String,
    },

    /// Nobody is signed in, so there is no user to load for.
    #[error("no signed-in user")]
    NoSession,
}

impl SyncError {
    /// Map a store failure for `operation` into the sync taxonomy.
    ///
    /// `NotFound` only stays `NotFound` for the profile lookup; a missing row
    /// anywhere else is a plain load failure.
    pub fn from_store(operation: LoadOperation, user_id: UserId, err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } if operation == LoadOperation::Profile => {
                SyncError::NotFound { user_id }
            }
            StoreError::Transport { message } => SyncError::Transport { operation, message },
            StoreError::Status { status, message } if status >= 500 => SyncError::Transport {
                operation,
                message: format!("HTTP {}: {}", status, message),
            },
            other => SyncError::Load {
                operation,
                message: other.to_string(),
            },
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SyncError::NotFound { .. } => ErrorCategory::Missing,
            SyncError::Transport { message, .. } if message.starts_with("HTTP ") => {
                ErrorCategory::Server
            }
            SyncError::Transport { .. } => ErrorCategory::Network,
            SyncError::Load { .. } => ErrorCategory::Client,
            SyncError::NoSession => ErrorCategory::User,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            SyncError::NotFound { .. } => "E_SYNC_NOT_FOUND",
            SyncError::Transport { .. } => "E_SYNC_TRANSPORT",
            SyncError::Load { .. } => "E_SYNC_LOAD",
            SyncError::NoSession => "E_SYNC_NO_SESSION",
        }
    }

    /// Banner text for the presentation layer.
    pub fn user_message(&self) -> String {
        match self {
            SyncError::NotFound { .. } => "We couldn't find your profile.".to_string(),
            SyncError::Transport { operation, .. } => format!(
                "Couldn't load {}. {}.",
                operation,
                self.category().recovery_hint()
            ),
            SyncError::Load { operation, .. } => format!("Something went wrong loading {}.", operation),
            SyncError::NoSession => "You are signed out. Please sign in again.".to_string(),
        }
    }

    pub fn operation(&self) -> Option<LoadOperation> {
        match self {
            SyncError::NotFound { .. } => Some(LoadOperation::Profile),
            SyncError::Transport { operation, .. } | SyncError::Load { operation, .. } => {
                Some(*operation)
            }
            SyncError::NoSession => None,
        }
    }
}
