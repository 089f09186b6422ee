//! Event operations

use super::ApiClient;
use crate::error::Result;
use crate::http::FetchOptions;
use crate::models::{ApiEventLog, GetEvent, SendEvent, SendEventBody, SendEventOptions};
use crate::types::Method;
use tracing::debug;

impl ApiClient {
    /// Send an event, optionally delayed
    pub async fn send_event(
        &self,
        event: &SendEvent,
        options: &SendEventOptions,
    ) -> Result<ApiEventLog> {
        let api_key = self.api_key()?;

        debug!("Sending event {}", event.name);

        let request = self
            .json_request(Method::POST, self.endpoint(&["api", "v1", "events"])?, &api_key)
            .json_from(&SendEventBody { event, options })?;

        self.fetcher.fetch(request, FetchOptions::default()).await
    }

    /// Cancel a delayed event that has not been delivered yet
    pub async fn cancel_event(&self, event_id: &str) -> Result<ApiEventLog> {
        let api_key = self.api_key()?;

        debug!("Cancelling event {}", event_id);

        let url = self.endpoint(&["api", "v1", "events", event_id, "cancel"])?;
        let request = self.json_request(Method::POST, url, &api_key);

        self.fetcher.fetch(request, FetchOptions::default()).await
    }

    /// Look up an event and the runs it triggered
    pub async fn get_event(&self, event_id: &str) -> Result<GetEvent> {
        let api_key = self.api_key()?;

        debug!("Getting event {}", event_id);

        let url = self.endpoint(&["api", "v1", "events", event_id])?;
        let request = self.read_request(url, &api_key);

        self.fetcher.fetch(request, FetchOptions::default()).await
    }
}
