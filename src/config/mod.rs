//! Process configuration (env > `.env` file), resolved once at startup.

use std::fmt;

use crate::error::{GodspeedError, Result};

pub const TOKEN_ENV: &str = "GODSPEED_TOKEN";
pub const LIST_ID_ENV: &str = "GODSPEED_LIST_ID";
pub const BASE_URL_ENV: &str = "GODSPEED_BASE_URL";

/// Default Godspeed API address.
pub const DEFAULT_BASE_URL: &str = "https://api.godspeedapp.com";

/// Startup configuration for the Godspeed client.
///
/// Both the token and the inbox list id are required; loading fails
/// immediately when either is missing rather than on the first tool call.
#[derive(Clone)]
pub struct GodspeedConfig {
    pub token: String,
    pub inbox_list_id: String,
    pub base_url: String,
}

impl fmt::Debug for GodspeedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GodspeedConfig")
            .field("token", &"..")
            .field("inbox_list_id", &self.inbox_list_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl GodspeedConfig {
    pub fn new(token: impl Into<String>, inbox_list_id: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            inbox_list_id: inbox_list_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the API address (tests point this at a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(base_url.into());
        self
    }

    /// Load from environment variables, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| GodspeedError::MissingConfiguration {
                    key: key.to_string(),
                })
        };

        let token = required(TOKEN_ENV)?;
        let inbox_list_id = required(LIST_ID_ENV)?;

        let mut config = Self::new(token, inbox_list_id);
        if let Some(url) = lookup(BASE_URL_ENV).filter(|url| !url.trim().is_empty()) {
            config = config.with_base_url(url.trim());
        }
        Ok(config)
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn loads_required_values_with_default_base_url() {
        let config =
            GodspeedConfig::from_lookup(lookup_from(&[(TOKEN_ENV, "tok"), (LIST_ID_ENV, "inbox")]))
                .unwrap();

        assert_eq!(config.token, "tok");
        assert_eq!(config.inbox_list_id, "inbox");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn missing_token_fails_fast() {
        let err = GodspeedConfig::from_lookup(lookup_from(&[(LIST_ID_ENV, "inbox")])).unwrap_err();
        assert!(matches!(
            err,
            GodspeedError::MissingConfiguration { ref key } if key == TOKEN_ENV
        ));
    }

    #[test]
    fn blank_list_id_counts_as_missing() {
        let err =
            GodspeedConfig::from_lookup(lookup_from(&[(TOKEN_ENV, "tok"), (LIST_ID_ENV, "  ")]))
                .unwrap_err();
        assert!(matches!(
            err,
            GodspeedError::MissingConfiguration { ref key } if key == LIST_ID_ENV
        ));
    }

    #[test]
    fn base_url_override_drops_trailing_slash() {
        let config = GodspeedConfig::from_lookup(lookup_from(&[
            (TOKEN_ENV, "tok"),
            (LIST_ID_ENV, "inbox"),
            (BASE_URL_ENV, "http://127.0.0.1:9000/"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn debug_output_redacts_token() {
        let config = GodspeedConfig::new("secret-token", "inbox");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret-token"));
        assert!(rendered.contains("inbox"));
    }
}
