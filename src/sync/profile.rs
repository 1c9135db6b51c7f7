//! Profile header loading.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::error::{LoadOperation, SyncError, SyncResult};
use crate::models::{Profile, UserId};
use crate::traits::RemoteStore;

use super::generation::{Generation, LoadGuard};
use super::messages::{ApplyOutcome, SyncMessage};

/// Fetches the single profile row for a user.
#[derive(Clone)]
pub struct ProfileLoader {
    store: Arc<dyn RemoteStore>,
}

impl ProfileLoader {
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self { store }
    }

    /// Load the profile for `user_id`. No retries.
    pub async fn load(&self, user_id: UserId) -> SyncResult<Profile> {
        self.store
            .get_profile(user_id)
            .await
            .map_err(|e| SyncError::from_store(LoadOperation::Profile, user_id, e))
    }
}

/// The profile snapshot a screen displays, plus its load bookkeeping.
///
/// A successful load replaces the snapshot wholesale; a failed one leaves it
/// as it was.
pub struct ProfileState {
    loader: ProfileLoader,
    snapshot: Option<Profile>,
    guard: LoadGuard,
    message_tx: mpsc::UnboundedSender<SyncMessage>,
}

impl ProfileState {
    pub fn new(store: Arc<dyn RemoteStore>, message_tx: mpsc::UnboundedSender<SyncMessage>) -> Self {
        Self {
            loader: ProfileLoader::new(store),
            snapshot: None,
            guard: LoadGuard::new(),
            message_tx,
        }
    }

    /// Dispatch a profile load for `user_id` in the background.
    pub fn reload(&mut self, user_id: UserId) -> Generation {
        let generation = self.guard.issue();
        let loader = self.loader.clone();
        let message_tx = self.message_tx.clone();
        tracing::debug!(%user_id, %generation, "dispatching profile load");

        tokio::spawn(async move {
            let result = loader.load(user_id).await;
            let _ = message_tx.send(SyncMessage::ProfileLoaded { generation, result });
        });

        generation
    }

    /// Apply a completed load if it is still the latest one.
    pub fn apply(&mut self, generation: Generation, result: SyncResult<Profile>) -> ApplyOutcome {
        if !self.guard.settle(generation) {
            tracing::debug!(%generation, "discarding stale profile load");
            return ApplyOutcome::Discarded;
        }

        match result {
            Ok(profile) => {
                tracing::info!(user_id = %profile.user_id, "profile loaded");
                self.snapshot = Some(profile);
                ApplyOutcome::Applied
            }
            Err(err) => {
                tracing::warn!(code = err.error_code(), "profile load failed: {}", err);
                ApplyOutcome::Failed(err)
            }
        }
    }

    pub fn snapshot(&self) -> Option<&Profile> {
        self.snapshot.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.guard.is_loading()
    }
}
