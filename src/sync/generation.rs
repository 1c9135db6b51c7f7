//! Generation tokens for discarding superseded loads.
//!
//! Every dispatched load is stamped with the next token from its
//! controller's counter. When the load reports back, its result is applied
//! only if the token is still the latest one issued; anything older lost the
//! race to a newer trigger and is dropped. In-flight requests are never
//! cancelled, only ignored.

use std::fmt;

/// Monotonically increasing marker for one dispatched load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues generations and tracks whether the latest one is outstanding.
#[derive(Debug, Default)]
pub struct LoadGuard {
    latest: u64,
    in_flight: bool,
}

impl LoadGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp a new load. Any earlier outstanding load becomes stale.
    pub fn issue(&mut self) -> Generation {
        self.latest += 1;
        self.in_flight = true;
        Generation(self.latest)
    }

    /// Whether `generation` is the most recently issued token.
    pub fn is_current(&self, generation: Generation) -> bool {
        self.latest != 0 && generation.0 == self.latest
    }

    /// Record that the load stamped `generation` finished.
    ///
    /// Returns true when its result should be applied. A stale completion
    /// leaves the loading flag alone since the newer load is still pending.
    pub fn settle(&mut self, generation: Generation) -> bool {
        if self.is_current(generation) && self.in_flight {
            self.in_flight = false;
            true
        } else {
            false
        }
    }

    /// True while the latest load has not reported back.
    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    pub fn latest(&self) -> Option<Generation> {
        (self.latest != 0).then_some(Generation(self.latest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_is_monotonic() {
        let mut guard = LoadGuard::new();
        assert!(guard.latest().is_none());

        let a = guard.issue();
        let b = guard.issue();
        assert!(b > a);
        assert_eq!(guard.latest(), Some(b));
    }

    #[test]
    fn test_latest_wins() {
        let mut guard = LoadGuard::new();
        let first = guard.issue();
        let second = guard.issue();

        // Newer load completes first
        assert!(guard.settle(second));
        assert!(!guard.is_loading());

        // Older load completes later and is discarded
        assert!(!guard.settle(first));
        assert!(!guard.is_loading());
    }

    #[test]
    fn test_stale_completion_keeps_loading() {
        let mut guard = LoadGuard::new();
        let first = guard.issue();
        let _second = guard.issue();

        assert!(!guard.settle(first));
        assert!(guard.is_loading());
    }

    #[test]
    fn test_settle_only_once() {
        let mut guard = LoadGuard::new();
        let only = guard.issue();
        assert!(guard.settle(only));
        assert!(!guard.settle(only));
    }

    #[test]
    fn test_generation_display() {
        let mut guard = LoadGuard::new();
        assert_eq!(guard.issue().to_string(), "#1");
    }
}
