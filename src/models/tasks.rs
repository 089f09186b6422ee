//! Task models

use crate::schema::{ApiVersion, ResponseVersion, VersionedResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lifecycle state of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Pending,
    Waiting,
    Running,
    Completed,
    Errored,
    Canceled,
}

/// A label/value pair shown in the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayProperty {
    pub label: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// How a task is rendered in the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStyle {
    pub style: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

/// Retry settings applied by the server when a task fails
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetryOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_timeout_in_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_timeout_in_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub randomize: Option<bool>,
}

/// JSON paths to redact from task output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactOptions {
    pub paths: Vec<String>,
}

/// A task as stored by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerTask {
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
    pub noop: bool,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub delay_until: Option<DateTime<Utc>>,
    pub status: TaskStatus,
    pub description: Option<String>,
    pub properties: Option<Vec<DisplayProperty>>,
    pub output_properties: Option<Vec<DisplayProperty>>,
    pub params: Option<Value>,
    pub output: Option<Value>,
    pub error: Option<String>,
    pub parent_id: Option<String>,
    pub style: Option<TaskStyle>,
    pub operation: Option<String>,
    pub callback_url: Option<String>,
}

/// A previously run task the server hands back so it can be skipped locally
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedTask {
    pub id: String,
    pub idempotency_key: String,
    pub status: TaskStatus,
    #[serde(default)]
    pub noop: bool,
    pub output: Option<Value>,
    pub parent_id: Option<String>,
}

/// One page of cached tasks
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CachedTasks {
    pub tasks: Vec<CachedTask>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// Run-task body for the lazy-loaded cached tasks protocol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunTaskResponseWithCachedTasksBody {
    pub task: ServerTask,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cached_tasks: Option<CachedTasks>,
}

/// Response to running a task, one arm per response version
#[derive(Debug, Clone, PartialEq)]
pub enum RunTaskResponse {
    /// `2023-09-29`: the task plus a page of cached tasks
    LazyLoadedCachedTasks(RunTaskResponseWithCachedTasksBody),
    /// No version header: the bare task
    Unversioned(ServerTask),
}

impl RunTaskResponse {
    /// The task regardless of response version
    pub fn task(&self) -> &ServerTask {
        match self {
            RunTaskResponse::LazyLoadedCachedTasks(body) => &body.task,
            RunTaskResponse::Unversioned(task) => task,
        }
    }

    /// Cached tasks, when the server sent any
    pub fn cached_tasks(&self) -> Option<&CachedTasks> {
        match self {
            RunTaskResponse::LazyLoadedCachedTasks(body) => body.cached_tasks.as_ref(),
            RunTaskResponse::Unversioned(_) => None,
        }
    }

    pub fn into_task(self) -> ServerTask {
        match self {
            RunTaskResponse::LazyLoadedCachedTasks(body) => body.task,
            RunTaskResponse::Unversioned(task) => task,
        }
    }
}

impl VersionedResponse for RunTaskResponse {
    const VERSIONS: &'static [ApiVersion] = &[ApiVersion::LazyLoadedCachedTasks];

    fn decode(version: ResponseVersion, body: Value) -> serde_json::Result<Self> {
        match version {
            ResponseVersion::Known(ApiVersion::LazyLoadedCachedTasks) => {
                serde_json::from_value(body).map(RunTaskResponse::LazyLoadedCachedTasks)
            }
            ResponseVersion::Unversioned => {
                serde_json::from_value(body).map(RunTaskResponse::Unversioned)
            }
        }
    }

    fn version(&self) -> ResponseVersion {
        match self {
            RunTaskResponse::LazyLoadedCachedTasks(_) => {
                ResponseVersion::Known(ApiVersion::LazyLoadedCachedTasks)
            }
            RunTaskResponse::Unversioned(_) => ResponseVersion::Unversioned,
        }
    }
}

/// Body for running (creating) a task
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunTaskBodyInput {
    pub idempotency_key: String,
    pub name: String,
    #[serde(default)]
    pub noop: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay_until: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<DisplayProperty>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_properties: Option<Vec<DisplayProperty>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redact: Option<RedactOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<TaskStyle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry: Option<RetryOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl RunTaskBodyInput {
    /// Create a task body with the required fields
    pub fn new(idempotency_key: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            idempotency_key: idempotency_key.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the params
    #[must_use]
    pub fn params(mut self, params: Value) -> Self {
        self.params = Some(params);
        self
    }

    /// Set the parent task
    #[must_use]
    pub fn parent_id(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Mark the task as a no-op
    #[must_use]
    pub fn noop(mut self) -> Self {
        self.noop = true;
        self
    }
}

/// Body for completing a task
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteTaskBodyInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<DisplayProperty>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl CompleteTaskBodyInput {
    /// Complete with an output value
    pub fn with_output(output: Value) -> Self {
        Self {
            output: Some(output),
            ..Default::default()
        }
    }
}

/// An error with optional name and stack trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorWithStack {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

/// Body for failing a task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailTaskBodyInput {
    pub error: ErrorWithStack,
}

impl FailTaskBodyInput {
    /// Fail with just a message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            error: ErrorWithStack {
                message: message.into(),
                name: None,
                stack: None,
            },
        }
    }
}
