//! HTTP helpers: client construction, bearer auth, status and body handling.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, RETRY_AFTER};
use reqwest::StatusCode;

use crate::error::{GodspeedError, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Build the pooled reqwest client shared by every request of one API client.
pub fn build_http_client() -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(REQUEST_TIMEOUT)
        .pool_max_idle_per_host(10)
        .build()
        .map_err(|e| GodspeedError::Configuration(format!("failed to build HTTP client: {e}")))
}

/// Set `Authorization: Bearer <token>` on `headers`, replacing any value the
/// caller supplied.
pub fn apply_bearer(headers: &mut HeaderMap, token: &str) -> Result<()> {
    let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
        GodspeedError::Configuration("auth token contains invalid header characters".into())
    })?;
    value.set_sensitive(true);
    headers.insert(AUTHORIZATION, value);
    Ok(())
}

/// Map a non-success status to the matching error.
pub fn status_to_error(status: StatusCode, headers: &HeaderMap, body: &str) -> GodspeedError {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return GodspeedError::RateLimited {
            retry_after_secs: retry_after_secs(headers),
        };
    }
    GodspeedError::http(status.as_u16(), body)
}

/// `Retry-After` in delta-seconds form. HTTP-date values are ignored.
fn retry_after_secs(headers: &HeaderMap) -> Option<u64> {
    headers
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse()
        .ok()
}

/// Parse a success body. Empty bodies (typical for DELETE) become `{}`.
pub fn parse_json_body(body: &str) -> Result<serde_json::Value> {
    if body.trim().is_empty() {
        return Ok(serde_json::Value::Object(serde_json::Map::new()));
    }
    Ok(serde_json::from_str(body)?)
}
