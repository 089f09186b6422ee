//! Connection auth lookup

use super::ApiClient;
use crate::error::Result;
use crate::http::FetchOptions;
use crate::models::ConnectionAuth;
use tracing::debug;

impl ApiClient {
    /// Fetch the credentials for a connection, or `None` if there are none
    pub async fn get_auth(&self, client: &str, id: &str) -> Result<Option<ConnectionAuth>> {
        let api_key = self.api_key()?;

        debug!("Getting auth for connection {}", id);

        let url = self.endpoint(&["api", "v1", client, "auth", id])?;
        let request = self
            .read_request(url, &api_key)
            .header("Accept", "application/json");

        self.fetcher
            .fetch_optional(request, FetchOptions::default())
            .await
    }
}
