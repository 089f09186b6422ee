//! Task operations

use super::{ApiClient, TRIGGER_VERSION_HEADER};
use crate::error::Result;
use crate::http::FetchOptions;
use crate::models::{
    CompleteTaskBodyInput, FailTaskBodyInput, RunTaskBodyInput, RunTaskResponse, ServerTask,
};
use crate::schema::ApiVersion;
use crate::types::Method;
use tracing::debug;

impl ApiClient {
    /// Create or resume a task within a run
    ///
    /// The response shape depends on the version the server reports; pass the
    /// cursor from a previous response to continue paging cached tasks.
    pub async fn run_task(
        &self,
        run_id: &str,
        task: &RunTaskBodyInput,
        cached_tasks_cursor: Option<&str>,
    ) -> Result<RunTaskResponse> {
        let api_key = self.api_key()?;

        debug!(
            "Running task {} ({}) in run {}",
            task.name, task.idempotency_key, run_id
        );

        let url = self.endpoint(&["api", "v1", "runs", run_id, "tasks"])?;
        let request = self
            .json_request(Method::POST, url, &api_key)
            .header("Idempotency-Key", task.idempotency_key.as_str())
            .header("X-Cached-Tasks-Cursor", cached_tasks_cursor.unwrap_or_default())
            .header(
                TRIGGER_VERSION_HEADER,
                ApiVersion::LazyLoadedCachedTasks.as_str(),
            )
            .json_from(task)?;

        self.fetcher
            .fetch_versioned(request, FetchOptions::default())
            .await
    }

    /// Mark a task as completed
    pub async fn complete_task(
        &self,
        run_id: &str,
        id: &str,
        task: &CompleteTaskBodyInput,
    ) -> Result<ServerTask> {
        let api_key = self.api_key()?;

        debug!("Completing task {} in run {}", id, run_id);

        let url = self.endpoint(&["api", "v1", "runs", run_id, "tasks", id, "complete"])?;
        let request = self
            .json_request(Method::POST, url, &api_key)
            .json_from(task)?;

        self.fetcher.fetch(request, FetchOptions::default()).await
    }

    /// Mark a task as failed
    pub async fn fail_task(
        &self,
        run_id: &str,
        id: &str,
        body: &FailTaskBodyInput,
    ) -> Result<ServerTask> {
        let api_key = self.api_key()?;

        debug!(
            "Failing task {} in run {}: {}",
            id, run_id, body.error.message
        );

        let url = self.endpoint(&["api", "v1", "runs", run_id, "tasks", id, "fail"])?;
        let request = self
            .json_request(Method::POST, url, &api_key)
            .json_from(body)?;

        self.fetcher.fetch(request, FetchOptions::default()).await
    }
}
