//! Error category classification for unified error handling.
//!
//! Categories drive the wording of the error banner the presentation layer
//! shows when a load fails.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Connection, DNS or timeout problems reaching the backend.
    Network,

    /// The backend answered with a failure status.
    Server,

    /// The requested record does not exist.
    Missing,

    /// Unexpected payloads or other programming errors.
    Client,

    /// The user has to act first (sign in, fix input).
    User,

    /// Missing or invalid configuration.
    Configuration,
}

impl ErrorCategory {
    /// Returns true if a new user-initiated trigger may well succeed.
    ///
    /// Nothing in the sync core retries on its own; this only decides whether
    /// the banner suggests pulling to refresh.
    pub fn is_transient(&self) -> bool {
        matches!(self, ErrorCategory::Network | ErrorCategory::Server)
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::Missing => "missing",
            ErrorCategory::Client => "client",
            ErrorCategory::User => "user",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns suggested recovery actions for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check your internet connection and pull to refresh",
            ErrorCategory::Server => "The server may be having issues. Pull to refresh later",
            ErrorCategory::Missing => "Finish setting up your profile and try again",
            ErrorCategory::Client => "This may be a bug. Please report it if it persists",
            ErrorCategory::User => "Please sign in and try again",
            ErrorCategory::Configuration => "Check your configuration settings",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
