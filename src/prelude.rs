//! Convenient re-exports.

pub use crate::api::{GodspeedClient, TaskApi, TaskResponse, TaskSummary, TaskUpdate};
pub use crate::config::GodspeedConfig;
pub use crate::error::{GodspeedError, Result};
pub use crate::tools::{TaskTools, ToolReply};
