//! rmcp tool server for the four task tools.

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{Implementation, ServerCapabilities, ServerInfo};
use rmcp::{tool, tool_handler, tool_router, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::tools::TaskTools;

const INSTRUCTIONS: &str = "Use this to manage the user's task list. You can list tasks, \
create tasks, update tasks, and delete tasks.";

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CreateTaskParams {
    /// The title of the task (required)
    pub title: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct UpdateTaskParams {
    /// The ID of the task to update (required)
    pub task_id: String,
    /// New title for the task (optional)
    #[serde(default)]
    pub title: Option<String>,
    /// Mark task as complete (true) or incomplete (false) (optional)
    #[serde(default)]
    pub is_complete: Option<bool>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct DeleteTaskParams {
    /// The ID of the task to delete
    pub task_id: String,
}

/// MCP server handler. Every tool returns text, including failures.
#[derive(Clone)]
pub struct TaskServer {
    tools: TaskTools,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl TaskServer {
    pub fn new(tools: TaskTools) -> Self {
        Self {
            tools,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "List all tasks in your inbox. Returns all incomplete tasks from your inbox list.")]
    async fn list_tasks(&self) -> String {
        self.tools.list_tasks().await.into_text()
    }

    #[tool(description = "Create a new task in your inbox.")]
    async fn create_task(
        &self,
        Parameters(CreateTaskParams { title }): Parameters<CreateTaskParams>,
    ) -> String {
        self.tools.create_task(&title).await.into_text()
    }

    #[tool(description = "Update a task's title or completion status.")]
    async fn update_task(
        &self,
        Parameters(UpdateTaskParams {
            task_id,
            title,
            is_complete,
        }): Parameters<UpdateTaskParams>,
    ) -> String {
        self.tools
            .update_task(&task_id, title, is_complete)
            .await
            .into_text()
    }

    #[tool(description = "Delete a task.")]
    async fn delete_task(
        &self,
        Parameters(DeleteTaskParams { task_id }): Parameters<DeleteTaskParams>,
    ) -> String {
        self.tools.delete_task(&task_id).await.into_text()
    }
}

#[tool_handler]
impl ServerHandler for TaskServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::GodspeedClient;
    use crate::config::GodspeedConfig;
    use std::sync::Arc;

    fn unauthenticated_server() -> TaskServer {
        let client = GodspeedClient::new(
            &GodspeedConfig::new("tok", "inbox").with_base_url("http://127.0.0.1:1"),
        )
        .unwrap();
        client.clear_auth_token();
        TaskServer::new(TaskTools::new(Arc::new(client)))
    }

    #[test]
    fn registers_the_four_task_tools() {
        let server = unauthenticated_server();
        let mut names: Vec<String> = server
            .tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect();
        names.sort();

        assert_eq!(
            names,
            vec!["create_task", "delete_task", "list_tasks", "update_task"]
        );
    }

    #[test]
    fn info_advertises_tools_and_instructions() {
        let info = unauthenticated_server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert_eq!(info.instructions.as_deref(), Some(INSTRUCTIONS));
    }

    #[tokio::test]
    async fn tools_return_error_text_instead_of_failing() {
        let server = unauthenticated_server();

        let listed = server.list_tasks().await;
        let updated = server
            .update_task(Parameters(UpdateTaskParams {
                task_id: "42".into(),
                title: Some("x".into()),
                is_complete: None,
            }))
            .await;

        assert_eq!(listed, "Error: No authentication token set");
        assert_eq!(updated, "Error: No authentication token set");
    }
}
