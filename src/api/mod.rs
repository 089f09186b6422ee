//! API client
//!
//! One async method per remote operation. Every method resolves the API key
//! first, so credential problems surface before any network call; the request
//! is then handed to the [`SchemaFetcher`] with the schema for that endpoint.
//!
//! # Example
//!
//! ```rust,ignore
//! use trigger_client::{ApiClient, ClientConfig};
//! use trigger_client::models::{SendEvent, SendEventOptions};
//!
//! let client = ApiClient::new(ClientConfig::builder().api_key("tr_dev_abc123").build())?;
//! let event = SendEvent::new("user.created", serde_json::json!({"id": 42}));
//! let log = client.send_event(&event, &SendEventOptions::default()).await?;
//! ```

mod auth;
mod endpoints;
mod events;
mod runs;
mod tasks;
mod triggers;

use crate::config::{ClientConfig, API_URL_VAR, DEFAULT_API_URL};
use crate::credential::{ApiKey, CredentialResolver, CredentialSource, ProcessEnv};
use crate::error::{Error, Result};
use crate::http::{RequestDescription, SchemaFetcher};
use crate::types::{Method, OptionStringExt};
use std::sync::Arc;
use url::Url;

/// Header announcing the response versions the client understands
pub const TRIGGER_VERSION_HEADER: &str = "Trigger-Version";

/// Client for the job orchestration API
#[derive(Clone)]
pub struct ApiClient {
    config: ClientConfig,
    base_url: Url,
    resolver: CredentialResolver,
    fetcher: SchemaFetcher,
}

impl ApiClient {
    /// Create a client that falls back to the process environment
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_source(config, Arc::new(ProcessEnv))
    }

    /// Create a client with an explicit fallback source
    pub fn with_source(config: ClientConfig, source: Arc<dyn CredentialSource>) -> Result<Self> {
        config.validate()?;

        let api_url = config
            .api_url
            .clone()
            .none_if_empty()
            .or_else(|| source.lookup(API_URL_VAR).none_if_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let base_url = Url::parse(&api_url)?;
        if base_url.cannot_be_a_base() {
            return Err(Error::config(format!("api_url cannot be a base URL: {api_url}")));
        }

        let fetcher = SchemaFetcher::with_config(&config)?;

        Ok(Self {
            config,
            base_url,
            resolver: CredentialResolver::new(source),
            fetcher,
        })
    }

    /// Resolved base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The underlying fetch engine
    pub fn fetcher(&self) -> &SchemaFetcher {
        &self.fetcher
    }

    /// Resolve the API key for one call
    pub fn api_key(&self) -> Result<ApiKey> {
        self.resolver
            .resolve(self.config.api_key.as_deref())
            .into_result()
    }

    /// Build a URL from path segments, percent-encoding each one
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                Error::config(format!("api_url cannot be a base URL: {}", self.base_url))
            })?;
            path.pop_if_empty().extend(segments);
        }
        Ok(url)
    }

    /// Request carrying a JSON content type and the bearer key
    fn json_request(&self, method: Method, url: Url, api_key: &ApiKey) -> RequestDescription {
        RequestDescription::new(method, url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", api_key.as_str()))
    }

    /// Read request carrying only the bearer key
    fn read_request(&self, url: Url, api_key: &ApiKey) -> RequestDescription {
        RequestDescription::get(url).header("Authorization", format!("Bearer {}", api_key.as_str()))
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url.as_str())
            .field("has_explicit_api_key", &self.config.api_key.is_some())
            .field("timeout", &self.config.timeout)
            .finish_non_exhaustive()
    }
}
