//! Trigger source, trigger registration and schedule operations

use super::ApiClient;
use crate::error::Result;
use crate::http::FetchOptions;
use crate::models::{
    OkResponse, RegisterScheduleBody, RegisterScheduleResponseBody, RegisterSourceEventV2,
    RegisterTriggerBodyV2, ScheduleMetadata, TriggerSource, UpdateTriggerSourceBodyV2,
};
use crate::types::Method;
use tracing::debug;

impl ApiClient {
    /// Update a trigger source's registered events and data
    pub async fn update_source(
        &self,
        client: &str,
        key: &str,
        source: &UpdateTriggerSourceBodyV2,
    ) -> Result<TriggerSource> {
        let api_key = self.api_key()?;

        debug!(
            "Updating source {} for {} ({} events)",
            key,
            client,
            source.registered_events.len()
        );

        let url = self.endpoint(&["api", "v2", client, "sources", key])?;
        let request = self
            .json_request(Method::PUT, url, &api_key)
            .json_from(source)?;

        self.fetcher.fetch(request, FetchOptions::default()).await
    }

    /// Register a dynamic trigger
    pub async fn register_trigger(
        &self,
        client: &str,
        id: &str,
        key: &str,
        payload: &RegisterTriggerBodyV2,
    ) -> Result<RegisterSourceEventV2> {
        let api_key = self.api_key()?;

        debug!("Registering trigger {} with key {}", id, key);

        let url = self.endpoint(&["api", "v2", client, "triggers", id, "registrations", key])?;
        let request = self
            .json_request(Method::PUT, url, &api_key)
            .json_from(payload)?;

        self.fetcher.fetch(request, FetchOptions::default()).await
    }

    /// Register a dynamic schedule under `key`
    pub async fn register_schedule(
        &self,
        client: &str,
        id: &str,
        key: &str,
        payload: &ScheduleMetadata,
    ) -> Result<RegisterScheduleResponseBody> {
        let api_key = self.api_key()?;

        debug!("Registering schedule {} with key {}", id, key);

        let url = self.endpoint(&["api", "v1", client, "schedules", id, "registrations"])?;
        let request = self
            .json_request(Method::POST, url, &api_key)
            .json_from(&RegisterScheduleBody {
                id: key,
                metadata: payload,
            })?;

        self.fetcher.fetch(request, FetchOptions::default()).await
    }

    /// Remove a dynamic schedule registration
    pub async fn unregister_schedule(
        &self,
        client: &str,
        id: &str,
        key: &str,
    ) -> Result<OkResponse> {
        let api_key = self.api_key()?;

        debug!("Unregistering schedule {} with key {}", id, key);

        let url = self.endpoint(&["api", "v1", client, "schedules", id, "registrations", key])?;
        let request = self.json_request(Method::DELETE, url, &api_key);

        self.fetcher.fetch(request, FetchOptions::default()).await
    }
}
