//! HTTP client that validates responses against schemas
//!
//! Provides the single place where HTTP outcomes are classified:
//! - Optional-read short circuit on `404`
//! - Client errors with the server's message
//! - Unexpected statuses
//! - JSON parsing and schema/version validation

use super::request::{FetchOptions, RequestDescription};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::schema::{decode_body, decode_versioned, VersionedResponse, VERSION_HEADER};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

/// A successful (`200`) response, parsed but not yet validated
struct RawBody {
    version: Option<String>,
    body: Value,
}

/// Issues requests and decodes their responses
#[derive(Clone)]
pub struct SchemaFetcher {
    client: Client,
}

impl SchemaFetcher {
    /// Create a fetcher with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(&ClientConfig::default())
    }

    /// Create a fetcher using the timeout and user agent from `config`
    pub fn with_config(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client })
    }

    /// Fetch and validate against a single schema
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        request: RequestDescription,
        options: FetchOptions,
    ) -> Result<T> {
        let response = self.send(&request).await?;
        let raw = read_body(response, &request.url, &options).await?;
        decode_body(raw.body, &request.url)
    }

    /// Like [`fetch`](Self::fetch), but a `404` on a read yields `None`
    pub async fn fetch_optional<T: DeserializeOwned>(
        &self,
        request: RequestDescription,
        options: FetchOptions,
    ) -> Result<Option<T>> {
        let response = self.send(&request).await?;
        if is_absent(&request, response.status()) {
            debug!("No result for optional request: {}", request.url);
            return Ok(None);
        }
        let raw = read_body(response, &request.url, &options).await?;
        decode_body(raw.body, &request.url).map(Some)
    }

    /// Fetch and validate against the schema of the version the server reports
    pub async fn fetch_versioned<T: VersionedResponse>(
        &self,
        request: RequestDescription,
        options: FetchOptions,
    ) -> Result<T> {
        let response = self.send(&request).await?;
        let raw = read_body(response, &request.url, &options).await?;
        decode_versioned(raw.version.as_deref(), raw.body, &request.url)
    }

    /// Like [`fetch_versioned`](Self::fetch_versioned), but a `404` on a read yields `None`
    pub async fn fetch_versioned_optional<T: VersionedResponse>(
        &self,
        request: RequestDescription,
        options: FetchOptions,
    ) -> Result<Option<T>> {
        let response = self.send(&request).await?;
        if is_absent(&request, response.status()) {
            debug!("No result for optional request: {}", request.url);
            return Ok(None);
        }
        let raw = read_body(response, &request.url, &options).await?;
        decode_versioned(raw.version.as_deref(), raw.body, &request.url).map(Some)
    }

    /// Send the request as described
    async fn send(&self, request: &RequestDescription) -> Result<Response> {
        let method = request.effective_method();
        let mut req = self.client.request(method.into(), &request.url);

        for (key, value) in &request.headers {
            req = req.header(key.as_str(), value.as_str());
        }

        if !request.query.is_empty() {
            req = req.query(&request.query);
        }

        if let Some(ref body) = request.body {
            req = req.json(body);
        }

        debug!("Sending request: {} {}", method, request.url);
        let response = req.send().await?;
        debug!(
            "Received {} for {} {}",
            response.status().as_u16(),
            method,
            request.url
        );

        Ok(response)
    }
}

impl std::fmt::Debug for SchemaFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaFetcher").finish_non_exhaustive()
    }
}

/// Optional-read short circuit
fn is_absent(request: &RequestDescription, status: StatusCode) -> bool {
    request.is_read() && status == StatusCode::NOT_FOUND
}

/// Classify the status and parse a `200` body as JSON
async fn read_body(response: Response, url: &str, options: &FetchOptions) -> Result<RawBody> {
    let status = response.status();

    if status != StatusCode::OK {
        if status.is_client_error() {
            let text = response.text().await?;
            if let Some(message) = server_error_message(&text) {
                warn!("Request to {} rejected with {}: {}", url, status.as_u16(), message);
                return Err(Error::client_request(status.as_u16(), message));
            }
        }

        let message = match &options.error_message {
            Some(prefix) => format!("{prefix}, got status code {}", status.as_u16()),
            None => format!("Failed to fetch {url}, got status code {}", status.as_u16()),
        };
        warn!("{}", message);
        return Err(Error::unexpected_status(status.as_u16(), message));
    }

    let version = response
        .headers()
        .get(VERSION_HEADER)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());

    let text = response.text().await?;
    let body = serde_json::from_str(&text)
        .map_err(|e| Error::decode(format!("invalid JSON from {url}: {e}")))?;

    Ok(RawBody { version, body })
}

/// The `error` field of a JSON error body
fn server_error_message(text: &str) -> Option<String> {
    let body: Value = serde_json::from_str(text).ok()?;
    body.get("error")?.as_str().map(str::to_string)
}

#[cfg(test)]
mod client_tests {
    use super::*;

    #[test]
    fn test_server_error_message() {
        assert_eq!(
            server_error_message(r#"{"error": "Invalid payload"}"#),
            Some("Invalid payload".to_string())
        );
        assert_eq!(server_error_message(r#"{"message": "nope"}"#), None);
        assert_eq!(server_error_message(r#"{"error": {"code": 1}}"#), None);
        assert_eq!(server_error_message("Not Found"), None);
        assert_eq!(server_error_message(""), None);
    }

    #[test]
    fn test_is_absent() {
        let get = RequestDescription::get("http://x");
        let no_method = RequestDescription {
            url: "http://x".to_string(),
            ..Default::default()
        };
        let post = RequestDescription::post("http://x");

        assert!(is_absent(&get, StatusCode::NOT_FOUND));
        assert!(is_absent(&no_method, StatusCode::NOT_FOUND));
        assert!(!is_absent(&post, StatusCode::NOT_FOUND));
        assert!(!is_absent(&get, StatusCode::OK));
        assert!(!is_absent(&get, StatusCode::GONE));
    }
}
