//! godspeed-mcp — Godspeed task tools for MCP hosts
//!
//! A thin authenticated client for the Godspeed REST API, a fail-soft tool
//! adapter that turns every outcome into text, and an rmcp server exposing
//! `list_tasks`, `create_task`, `update_task` and `delete_task`.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use godspeed_mcp::prelude::*;
//!
//! # async fn example() -> godspeed_mcp::error::Result<()> {
//! let config = GodspeedConfig::from_env()?;
//! let tools = TaskTools::new(Arc::new(GodspeedClient::new(&config)?));
//! println!("{}", tools.list_tasks().await.into_text());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod prelude;
pub mod tools;

#[cfg(feature = "mcp")]
pub mod mcp;

#[cfg(feature = "cli")]
pub mod cli;
