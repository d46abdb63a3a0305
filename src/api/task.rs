//! Task projections and shape-gated response reduction.

use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::Display;

/// Reduced three-field view of a remote task.
///
/// Fields stay untyped JSON so that an unexpected remote type (a numeric id,
/// say) is carried through instead of failing. Missing fields become `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSummary {
    pub id: Value,
    pub title: Value,
    pub due_date: Value,
}

impl TaskSummary {
    /// Project a raw remote task record. `due_date` comes from `due_at`.
    pub fn from_remote(task: &Value) -> Self {
        let field = |key: &str| task.get(key).cloned().unwrap_or(Value::Null);
        Self {
            id: field("id"),
            title: field("title"),
            due_date: field("due_at"),
        }
    }
}

/// A normalized API response.
///
/// Serializes as `{"tasks": [...]}`, `{"task": {...}}`, or the raw value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TaskResponse {
    Tasks { tasks: Vec<TaskSummary> },
    Task { task: TaskSummary },
    /// Response did not have the expected shape and is returned unchanged.
    Raw(Value),
}

impl TaskResponse {
    /// Reduce a list response when it carries a `tasks` array.
    pub fn from_list(raw: Value) -> Self {
        match raw.get("tasks") {
            Some(Value::Array(tasks)) => Self::Tasks {
                tasks: tasks.iter().map(TaskSummary::from_remote).collect(),
            },
            _ => Self::Raw(raw),
        }
    }

    /// Reduce a create/update response when it carries a `data` object.
    pub fn from_single(raw: Value) -> Self {
        match raw.get("data") {
            Some(record @ Value::Object(_)) => Self::Task {
                task: TaskSummary::from_remote(record),
            },
            _ => Self::Raw(raw),
        }
    }
}

/// Status filter accepted by `GET /tasks`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum TaskStatus {
    Incomplete,
}

/// Body of `POST /tasks`.
#[derive(Debug, Clone, Serialize)]
pub struct NewTask<'a> {
    pub title: &'a str,
    pub list_id: &'a str,
}

/// Partial-update body for `PATCH /tasks/{id}`. Unset fields are omitted
/// from the payload, never sent as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_complete: Option<bool>,
}
