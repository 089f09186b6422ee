//! Run operations

use super::ApiClient;
use crate::error::Result;
use crate::http::FetchOptions;
use crate::models::{
    GetRun, GetRunOptions, GetRunStatuses, GetRuns, GetRunsOptions, JobRunStatusRecord,
    StatusUpdate,
};
use crate::types::Method;
use tracing::debug;

impl ApiClient {
    /// Look up a run with its tasks
    pub async fn get_run(&self, run_id: &str, options: &GetRunOptions) -> Result<GetRun> {
        let api_key = self.api_key()?;

        debug!("Getting run {}", run_id);

        let url = self.endpoint(&["api", "v1", "runs", run_id])?;
        let request = self.read_request(url, &api_key).query_from(options)?;

        self.fetcher.fetch(request, FetchOptions::default()).await
    }

    /// Cancel a run
    pub async fn cancel_run(&self, run_id: &str) -> Result<GetRun> {
        let api_key = self.api_key()?;

        debug!("Cancelling run {}", run_id);

        let url = self.endpoint(&["api", "v1", "runs", run_id, "cancel"])?;
        let request = self.json_request(Method::POST, url, &api_key);

        self.fetcher.fetch(request, FetchOptions::default()).await
    }

    /// List a job's runs
    pub async fn get_runs(&self, job_slug: &str, options: &GetRunsOptions) -> Result<GetRuns> {
        let api_key = self.api_key()?;

        debug!("Getting runs for job {}", job_slug);

        let url = self.endpoint(&["api", "v1", "jobs", job_slug, "runs"])?;
        let request = self.read_request(url, &api_key).query_from(options)?;

        self.fetcher.fetch(request, FetchOptions::default()).await
    }

    /// Read a run's statuses
    pub async fn get_run_statuses(&self, run_id: &str) -> Result<GetRunStatuses> {
        let api_key = self.api_key()?;

        debug!("Getting statuses for run {}", run_id);

        let url = self.endpoint(&["api", "v1", "runs", run_id, "statuses"])?;
        let request = self.read_request(url, &api_key);

        self.fetcher.fetch(request, FetchOptions::default()).await
    }

    /// Create or update one of a run's named statuses
    pub async fn update_status(
        &self,
        run_id: &str,
        id: &str,
        status: &StatusUpdate,
    ) -> Result<JobRunStatusRecord> {
        let api_key = self.api_key()?;

        debug!("Updating status {} for run {}", id, run_id);

        let url = self.endpoint(&["api", "v1", "runs", run_id, "statuses", id])?;
        let request = self
            .json_request(Method::PUT, url, &api_key)
            .json_from(status)?;

        self.fetcher.fetch(request, FetchOptions::default()).await
    }
}
