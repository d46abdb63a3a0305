//! Command-line interface for the server binary.

use std::net::SocketAddr;

use clap::{Parser, ValueEnum};

/// Godspeed MCP server
#[derive(Parser, Debug)]
#[command(name = "godspeed-mcp", version, about = "Serve Godspeed task tools over MCP")]
pub struct Cli {
    /// Transport to serve the tools over
    #[arg(short, long, value_enum, default_value_t = Transport::Http)]
    pub transport: Transport,

    /// Listen address for the HTTP transport
    #[arg(short, long, default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,
}

/// Supported MCP transports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transport {
    /// JSON-RPC over stdin/stdout
    Stdio,
    /// Streamable HTTP at /mcp
    Http,
}
