//! Error types for the Godspeed client.

use thiserror::Error;

/// Broad error category, used for log fields and tool-facing hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Authentication,
    RateLimit,
    Network,
    Server,
    Api,
    Configuration,
    Serialization,
}

/// Primary error type for all Godspeed operations.
#[derive(Error, Debug)]
pub enum GodspeedError {
    #[error("No authentication token set")]
    NotAuthenticated,

    #[error("Rate limit exceeded. Please try again later.")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("HTTP error (status {status}): {body}")]
    HttpError { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid task id: {0:?}")]
    InvalidPathSegment(String),

    #[error("Missing configuration: {key} is not set")]
    MissingConfiguration { key: String },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl GodspeedError {
    /// Create an HTTP error from a non-success status and its body.
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::HttpError {
            status,
            body: body.into(),
        }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotAuthenticated => ErrorCategory::Authentication,
            Self::RateLimited { .. } => ErrorCategory::RateLimit,
            Self::Network(_) => ErrorCategory::Network,
            Self::Decode(_) => ErrorCategory::Serialization,
            Self::InvalidPathSegment(_) => ErrorCategory::Api,
            Self::MissingConfiguration { .. } | Self::Configuration(_) => {
                ErrorCategory::Configuration
            }
            Self::HttpError { status, .. } => match status {
                401 | 403 => ErrorCategory::Authentication,
                500..=599 => ErrorCategory::Server,
                _ => ErrorCategory::Api,
            },
        }
    }

    /// Whether a caller could reasonably retry. Nothing in this crate retries;
    /// the host decides.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::RateLimit | ErrorCategory::Network | ErrorCategory::Server
        )
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, GodspeedError>;
