//! Backend connection configuration.
//!
//! # Example
//!
//! ```ignore
//! use nusell::config::SyncConfig;
//!
//! let config = SyncConfig::new("https://project.supabase.co")
//!     .with_api_key("anon-key")
//!     .with_request_timeout(Duration::from_secs(10));
//! ```

use std::time::Duration;

use thiserror::Error;

use crate::error::ErrorCategory;

/// Environment variable holding the backend project URL.
pub const ENV_URL: &str = "NUSELL_URL";
/// Environment variable holding the public (anon) API key.
pub const ENV_ANON_KEY: &str = "NUSELL_ANON_KEY";
/// Environment variable holding a signed-in user's access token.
pub const ENV_ACCESS_TOKEN: &str = "NUSELL_ACCESS_TOKEN";
/// Environment variable holding a request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "NUSELL_TIMEOUT_SECS";

/// Path of the row API under the project URL.
const REST_PATH: &str = "/rest/v1";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{name} has invalid value '{value}'")]
    Invalid { name: &'static str, value: String },
}

impl ConfigError {
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Configuration
    }
}

/// Where the remote data store lives and how to authenticate to it.
#[derive(Debug, Clone, PartialEq)]
pub struct SyncConfig {
    /// Project URL, without the `/rest/v1` suffix
    pub base_url: String,
    /// Public API key, sent as `apikey` and as the default bearer token
    pub api_key: Option<String>,
    /// User access token; overrides the API key as bearer token when set
    pub access_token: Option<String>,
    /// Per-request timeout. `None` waits indefinitely
    pub request_timeout: Option<Duration>,
}

impl SyncConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: None,
            access_token: None,
            request_timeout: None,
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Read configuration from `NUSELL_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = non_empty_var(ENV_URL).ok_or(ConfigError::Missing(ENV_URL))?;
        let mut config = Self::new(base_url);
        config.api_key = non_empty_var(ENV_ANON_KEY);
        config.access_token = non_empty_var(ENV_ACCESS_TOKEN);

        if let Some(raw) = non_empty_var(ENV_TIMEOUT_SECS) {
            let secs = raw.parse::<u64>().map_err(|_| ConfigError::Invalid {
                name: ENV_TIMEOUT_SECS,
                value: raw.clone(),
            })?;
            config.request_timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Base URL of the row API.
    pub fn rest_url(&self) -> String {
        format!("{}{}", self.base_url, REST_PATH)
    }

    /// Token sent in the `Authorization` header, if any.
    pub fn bearer_token(&self) -> Option<&str> {
        self.access_token.as_deref().or(self.api_key.as_deref())
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
