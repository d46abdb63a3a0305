//! Shared test helpers.

use godspeed_mcp::api::GodspeedClient;
use godspeed_mcp::config::GodspeedConfig;
use wiremock::MockServer;

pub const TOKEN: &str = "test-token";
pub const INBOX: &str = "inbox-list";

/// A client pointed at the mock server, authenticated with [`TOKEN`].
pub fn client_for(server: &MockServer) -> GodspeedClient {
    let config = GodspeedConfig::new(TOKEN, INBOX).with_base_url(server.uri());
    GodspeedClient::new(&config).expect("client builds")
}

/// Number of requests the mock server has seen.
pub async fn request_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or(0)
}
