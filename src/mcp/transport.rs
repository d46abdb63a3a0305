//! Transports the task server can be served over.

use std::error::Error;
use std::net::SocketAddr;

use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
use rmcp::transport::streamable_http_server::StreamableHttpService;
use rmcp::ServiceExt;
use tracing::info;

use super::server::TaskServer;

/// Path the streamable HTTP endpoint is mounted at.
pub const HTTP_PATH: &str = "/mcp";

/// Serve one session over stdin/stdout until the peer disconnects.
pub async fn serve_stdio(server: TaskServer) -> Result<(), Box<dyn Error>> {
    info!("serving MCP over stdio");
    let running = server.serve(rmcp::transport::stdio()).await?;
    let reason = running.waiting().await?;
    info!(?reason, "MCP stdio session ended");
    Ok(())
}

/// Serve streamable HTTP sessions on `bind` until Ctrl-C.
pub async fn serve_http(server: TaskServer, bind: SocketAddr) -> Result<(), Box<dyn Error>> {
    let service = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        Default::default(),
    );
    let router = axum::Router::new().nest_service(HTTP_PATH, service);

    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!(addr = %listener.local_addr()?, path = HTTP_PATH, "serving MCP over streamable HTTP");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;
    Ok(())
}
