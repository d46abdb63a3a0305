//! Model Context Protocol server exposing the task tools.

pub mod server;
pub mod transport;

pub use server::TaskServer;
pub use transport::{serve_http, serve_stdio};
