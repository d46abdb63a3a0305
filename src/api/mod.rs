//! Godspeed REST API client and response shaping.

pub mod client;
pub mod http;
pub mod task;

pub use client::{GodspeedClient, RequestOptions};
pub use task::{TaskResponse, TaskStatus, TaskSummary, TaskUpdate};

use async_trait::async_trait;

use crate::error::Result;

/// The four task operations exposed to tool hosts.
///
/// Implemented by [`GodspeedClient`]; the tool adapter depends on this trait
/// so it can run against in-memory fakes.
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Incomplete tasks in the inbox list.
    async fn list_tasks(&self) -> Result<TaskResponse>;

    /// Create a task in the inbox list.
    async fn create_task(&self, title: &str) -> Result<TaskResponse>;

    /// Apply a partial update to one task.
    async fn update_task(&self, task_id: &str, update: TaskUpdate) -> Result<TaskResponse>;

    /// Delete one task. The response is returned as-is.
    async fn delete_task(&self, task_id: &str) -> Result<serde_json::Value>;
}
