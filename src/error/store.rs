//! Errors raised by remote data store implementations.

use thiserror::Error;

/// Failure of a single query against the remote data store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The query matched no row where exactly one was expected.
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// The backend could not be reached.
    #[error("transport error: {message}")]
    Transport { message: String },

    /// The backend answered with a non-2xx status.
    #[error("HTTP {status} error: {message}")]
    Status { status: u16, message: String },

    /// The backend answered with a payload we could not decode.
    #[error("invalid response: {message}")]
    InvalidResponse { message: String },
}

impl StoreError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        StoreError::NotFound {
            resource: resource.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        StoreError::Transport {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::InvalidResponse {
            message: err.to_string(),
        }
    }
}

/// Classify a reqwest error into a StoreError.
pub fn classify_reqwest_error(err: &reqwest::Error) -> StoreError {
    if err.is_connect() || err.is_timeout() || err.is_request() {
        StoreError::Transport {
            message: err.to_string(),
        }
    } else if err.is_status() {
        StoreError::Status {
            status: err.status().map(|s| s.as_u16()).unwrap_or(0),
            message: err.to_string(),
        }
    } else if err.is_decode() {
        StoreError::InvalidResponse {
            message: format!("Failed to decode response: {}", err),
        }
    } else {
        StoreError::Transport {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display() {
        assert_eq!(
            StoreError::not_found("profile 42").to_string(),
            "profile 42 not found"
        );
        assert_eq!(
            StoreError::transport("connection refused").to_string(),
            "transport error: connection refused"
        );
        assert_eq!(
            StoreError::Status {
                status: 503,
                message: "unavailable".to_string()
            }
            .to_string(),
            "HTTP 503 error: unavailable"
        );
    }

    #[test]
    fn test_json_error_becomes_invalid_response() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: StoreError = json_err.into();
        assert!(matches!(err, StoreError::InvalidResponse { .. }));
    }
}
