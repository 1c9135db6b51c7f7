//! Completion handling for the profile screen.

use crate::models::ViewMode;
use crate::sync::{ApplyOutcome, LoadSource, SyncMessage};

use super::{ProfileScreen, ScreenEvent};

impl ProfileScreen {
    /// Apply a completion message and report what changed.
    ///
    /// Stale completions change nothing and produce no event. A failure is
    /// reported exactly once, as a single `ScreenEvent::Error`.
    pub fn handle_message(&mut self, msg: SyncMessage) -> Vec<ScreenEvent> {
        let mut events = Vec::new();
        match msg {
            SyncMessage::ProfileLoaded { generation, result } => {
                let outcome = self.profile.apply(generation, result);
                self.record(outcome, ScreenEvent::ProfileUpdated, &mut events);
                if self.refresh.settle(LoadSource::Profile, generation) {
                    self.finish_refresh(&mut events);
                }
            }
            SyncMessage::FeedLoaded {
                generation,
                mode,
                result,
            } => {
                let outcome = self.feed.apply(generation, mode, result);
                let updated = ScreenEvent::FeedUpdated {
                    mode,
                    count: self.feed.display_list().len(),
                };
                self.record(outcome, updated, &mut events);
                if self.refresh.settle(LoadSource::Feed, generation) {
                    self.finish_refresh(&mut events);
                }
            }
            SyncMessage::RecentPostsLoaded { generation, .. } => {
                tracing::debug!(%generation, "profile screen ignoring home feed completion");
            }
        }
        events
    }

    fn record(&mut self, outcome: ApplyOutcome, applied: ScreenEvent, events: &mut Vec<ScreenEvent>) {
        match outcome {
            ApplyOutcome::Applied => events.push(applied),
            ApplyOutcome::Failed(err) => {
                self.last_error = Some(err.clone());
                events.push(ScreenEvent::Error(err));
            }
            ApplyOutcome::Discarded => {}
        }
    }

    /// A refresh always lands on the posts tab.
    fn finish_refresh(&mut self, events: &mut Vec<ScreenEvent>) {
        self.feed.reset_mode(ViewMode::Posts);
        events.push(ScreenEvent::RefreshFinished);
    }
}
