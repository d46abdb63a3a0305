//! Fail-soft adapter from tool calls to the task API.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::api::{TaskApi, TaskUpdate};
use crate::error::Result;

use super::reply::ToolReply;

/// The four task tools. Every call resolves to a [`ToolReply`]; client
/// failures never escape.
#[derive(Clone)]
pub struct TaskTools {
    api: Arc<dyn TaskApi>,
}

impl TaskTools {
    pub fn new(api: Arc<dyn TaskApi>) -> Self {
        Self { api }
    }

    pub async fn list_tasks(&self) -> ToolReply {
        debug!(tool = "list_tasks", "tool invoked");
        finish("list_tasks", self.api.list_tasks().await)
    }

    pub async fn create_task(&self, title: &str) -> ToolReply {
        debug!(tool = "create_task", "tool invoked");
        finish("create_task", self.api.create_task(title).await)
    }

    pub async fn update_task(
        &self,
        task_id: &str,
        title: Option<String>,
        is_complete: Option<bool>,
    ) -> ToolReply {
        debug!(tool = "update_task", task_id, "tool invoked");
        let update = TaskUpdate::builder()
            .maybe_title(title)
            .maybe_is_complete(is_complete)
            .build();
        finish("update_task", self.api.update_task(task_id, update).await)
    }

    pub async fn delete_task(&self, task_id: &str) -> ToolReply {
        debug!(tool = "delete_task", task_id, "tool invoked");
        finish("delete_task", self.api.delete_task(task_id).await)
    }
}

impl std::fmt::Debug for TaskTools {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskTools").finish_non_exhaustive()
    }
}

fn finish<T: Serialize>(tool: &str, result: Result<T>) -> ToolReply {
    match result {
        Ok(value) => ToolReply::success(&value),
        Err(err) => {
            warn!(
                tool,
                error = %err,
                category = ?err.category(),
                retryable = err.is_retryable(),
                "tool call failed"
            );
            ToolReply::failure(&err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{TaskResponse, TaskSummary};
    use crate::error::GodspeedError;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use std::sync::Mutex;

    /// Records calls and fails or succeeds on demand.
    #[derive(Default)]
    struct FakeApi {
        fail_with: Mutex<Option<GodspeedError>>,
        updates: Mutex<Vec<(String, TaskUpdate)>>,
    }

    impl FakeApi {
        fn failing(err: GodspeedError) -> Self {
            Self {
                fail_with: Mutex::new(Some(err)),
                ..Default::default()
            }
        }

        fn check(&self) -> Result<()> {
            match self.fail_with.lock().unwrap().take() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl TaskApi for FakeApi {
        async fn list_tasks(&self) -> Result<TaskResponse> {
            self.check()?;
            Ok(TaskResponse::Tasks { tasks: vec![] })
        }

        async fn create_task(&self, title: &str) -> Result<TaskResponse> {
            self.check()?;
            Ok(TaskResponse::Task {
                task: TaskSummary::from_remote(&json!({"id": "1", "title": title})),
            })
        }

        async fn update_task(&self, task_id: &str, update: TaskUpdate) -> Result<TaskResponse> {
            self.check()?;
            self.updates
                .lock()
                .unwrap()
                .push((task_id.to_string(), update));
            Ok(TaskResponse::Raw(json!({"ok": true})))
        }

        async fn delete_task(&self, _task_id: &str) -> Result<Value> {
            self.check()?;
            Ok(json!({}))
        }
    }

    #[tokio::test]
    async fn success_is_pretty_json() {
        let tools = TaskTools::new(Arc::new(FakeApi::default()));
        let text = tools.create_task("Buy milk").await.into_text();
        let parsed: Value = serde_json::from_str(&text).unwrap();

        assert_eq!(
            parsed,
            json!({"task": {"id": "1", "title": "Buy milk", "due_date": null}})
        );
        assert!(text.contains("\n  \"task\""));
    }

    #[tokio::test]
    async fn update_passes_only_supplied_fields() {
        let api = Arc::new(FakeApi::default());
        let tools = TaskTools::new(api.clone());

        tools
            .update_task("42", Some("Renamed".into()), None)
            .await;
        tools.update_task("43", None, Some(false)).await;

        let updates = api.updates.lock().unwrap();
        assert_eq!(updates[0].0, "42");
        assert_eq!(updates[0].1, TaskUpdate::builder().title("Renamed").build());
        assert_eq!(updates[1].1, TaskUpdate::builder().is_complete(false).build());
    }

    #[tokio::test]
    async fn every_failure_kind_becomes_error_text() {
        let errors = vec![
            GodspeedError::NotAuthenticated,
            GodspeedError::RateLimited {
                retry_after_secs: None,
            },
            GodspeedError::http(500, "boom"),
            GodspeedError::Decode(serde_json::from_str::<Value>("{").unwrap_err()),
            GodspeedError::Configuration("bad".into()),
        ];

        for err in errors {
            let tools = TaskTools::new(Arc::new(FakeApi::failing(err)));
            let text = tools.list_tasks().await.into_text();
            assert!(text.starts_with("Error: "), "unexpected text: {text}");
        }
    }

    #[tokio::test]
    async fn delete_of_empty_response_is_braces() {
        let tools = TaskTools::new(Arc::new(FakeApi::default()));
        assert_eq!(tools.delete_task("42").await.into_text(), "{}");
    }
}
