//! Endpoint registration

use super::ApiClient;
use crate::error::Result;
use crate::http::FetchOptions;
use crate::models::{EndpointRecord, RegisterEndpointBody};
use crate::types::Method;
use tracing::debug;

impl ApiClient {
    /// Register the URL the server calls to run jobs
    pub async fn register_endpoint(&self, url: &str, name: &str) -> Result<EndpointRecord> {
        let api_key = self.api_key()?;

        debug!("Registering endpoint {} at {}", name, url);

        let request = self
            .json_request(Method::POST, self.endpoint(&["api", "v1", "endpoints"])?, &api_key)
            .json_from(&RegisterEndpointBody {
                url: url.to_string(),
                name: name.to_string(),
            })?;

        self.fetcher
            .fetch(
                request,
                FetchOptions::new().error_message("Failed to register entry point"),
            )
            .await
    }
}
