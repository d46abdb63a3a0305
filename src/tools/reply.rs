//! Textual tool results.

use serde::Serialize;

use crate::error::GodspeedError;

/// Outcome of one tool invocation, before it is flattened to text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolReply {
    /// Pretty-printed JSON payload.
    Success(String),
    /// Human-readable failure description, without the `Error: ` prefix.
    Failure(String),
}

impl ToolReply {
    /// Render a successful value as JSON with 2-space indentation.
    pub fn success<T: Serialize>(value: &T) -> Self {
        match serde_json::to_string_pretty(value) {
            Ok(text) => Self::Success(text),
            Err(err) => Self::failure(&GodspeedError::Decode(err)),
        }
    }

    /// Describe a client failure for the host.
    pub fn failure(err: &GodspeedError) -> Self {
        let message = match err {
            GodspeedError::NotAuthenticated => err.to_string(),
            GodspeedError::RateLimited {
                retry_after_secs: Some(secs),
            } => format!("Rate limit exceeded. Please try again in {secs} seconds."),
            GodspeedError::RateLimited {
                retry_after_secs: None,
            } => err.to_string(),
            GodspeedError::HttpError { status, body } if body.trim().is_empty() => {
                format!("HTTP error (status {status})")
            }
            GodspeedError::HttpError { .. } => err.to_string(),
            GodspeedError::Network(_) => err.to_string(),
            GodspeedError::Decode(_) => err.to_string(),
            GodspeedError::InvalidPathSegment(_) => err.to_string(),
            GodspeedError::MissingConfiguration { .. } | GodspeedError::Configuration(_) => {
                err.to_string()
            }
        };
        Self::Failure(message)
    }

    /// Flatten to the string handed back to the host.
    pub fn into_text(self) -> String {
        match self {
            Self::Success(text) => text,
            Self::Failure(message) => format!("Error: {message}"),
        }
    }
}
