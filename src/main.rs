//! godspeed-mcp binary entry point.

use std::sync::Arc;

use clap::Parser;
use godspeed_mcp::api::GodspeedClient;
use godspeed_mcp::cli::{Cli, Transport};
use godspeed_mcp::config::GodspeedConfig;
use godspeed_mcp::mcp::{serve_http, serve_stdio, TaskServer};
use godspeed_mcp::tools::TaskTools;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // stdout carries the stdio transport, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = GodspeedConfig::from_env()?;
    let client = GodspeedClient::new(&config)?;
    info!(base_url = client.base_url(), list_id = client.inbox_list_id(), "Godspeed client ready");

    let server = TaskServer::new(TaskTools::new(Arc::new(client)));

    match cli.transport {
        Transport::Stdio => serve_stdio(server).await,
        Transport::Http => serve_http(server, cli.bind).await,
    }
}
