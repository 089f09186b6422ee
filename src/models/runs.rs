//! Run models

use super::tasks::TaskStatus;
use crate::types::JsonObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lifecycle state of a job run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunStatus {
    Pending,
    Queued,
    WaitingOnConnections,
    Preprocessing,
    Started,
    Executing,
    WaitingToContinue,
    WaitingToExecute,
    Success,
    Failure,
    TimedOut,
    Aborted,
    Canceled,
    UnresolvedAuth,
    InvalidPayload,
}

impl RunStatus {
    /// Check if the run has reached a terminal state
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            RunStatus::Success
                | RunStatus::Failure
                | RunStatus::TimedOut
                | RunStatus::Aborted
                | RunStatus::Canceled
                | RunStatus::UnresolvedAuth
                | RunStatus::InvalidPayload
        )
    }
}

/// A job run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    pub id: String,
    pub status: RunStatus,
    pub started_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// A task within a run, with its subtasks when requested
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunTaskSummary {
    pub id: String,
    pub display_key: Option<String>,
    pub status: TaskStatus,
    pub name: String,
    pub icon: Option<String>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtasks: Option<Vec<RunTaskSummary>>,
}

/// State shown for a run status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusState {
    Loading,
    Success,
    Failure,
}

/// Update to a run's named status
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<StatusState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonObject>,
}

/// A previous value of a run status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusHistoryEntry {
    pub label: Option<String>,
    pub state: Option<StatusState>,
    pub data: Option<JsonObject>,
}

/// A named run status and its history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRunStatusRecord {
    pub key: String,
    pub label: String,
    pub state: Option<StatusState>,
    pub data: Option<JsonObject>,
    #[serde(default)]
    pub history: Vec<StatusHistoryEntry>,
}

/// A run with its tasks and statuses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRun {
    #[serde(flatten)]
    pub run: Run,
    pub output: Option<Value>,
    pub tasks: Vec<RunTaskSummary>,
    #[serde(default)]
    pub statuses: Vec<JobRunStatusRecord>,
    pub next_cursor: Option<String>,
}

/// Page of runs for a job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRuns {
    pub runs: Vec<Run>,
    pub next_cursor: Option<String>,
}

/// Minimal run state returned alongside its statuses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunStatusSummary {
    pub id: String,
    pub status: RunStatus,
    pub output: Option<Value>,
}

/// A run's statuses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetRunStatuses {
    pub run: RunStatusSummary,
    pub statuses: Vec<JobRunStatusRecord>,
}

/// Options for looking up a single run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetRunOptions {
    /// Include subtasks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtasks: Option<bool>,
    /// Task page cursor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    /// Task page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take: Option<u32>,
    /// Include task details
    #[serde(rename = "taskdetails", skip_serializing_if = "Option::is_none")]
    pub task_details: Option<bool>,
}

/// Options for listing a job's runs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetRunsOptions {
    /// Page cursor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take: Option<u32>,
}
