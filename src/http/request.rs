//! Request descriptions

use crate::error::{Error, Result};
use crate::types::{Method, StringMap};
use serde::Serialize;
use serde_json::Value;

/// Everything needed to issue one HTTP request
///
/// A missing method is sent as `GET`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestDescription {
    /// HTTP method
    pub method: Option<Method>,
    /// Fully qualified target URL
    pub url: String,
    /// Request headers
    pub headers: StringMap,
    /// Query parameters
    pub query: StringMap,
    /// JSON body
    pub body: Option<Value>,
}

impl RequestDescription {
    /// Create a request with the given method
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method: Some(method),
            url: url.into(),
            ..Default::default()
        }
    }

    /// Create a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    /// Create a POST request
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    /// Create a PUT request
    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::PUT, url)
    }

    /// Create a DELETE request
    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::DELETE, url)
    }

    /// Add a header, replacing any previous value for the same name
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add a query parameter
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.insert(key.into(), value.into());
        self
    }

    /// Add every set field of a serializable struct as a query parameter
    pub fn query_from<T: Serialize>(mut self, params: &T) -> Result<Self> {
        let Value::Object(fields) = serde_json::to_value(params).map_err(Error::Encode)? else {
            return Err(Error::config("query parameters must serialize to an object"));
        };

        for (key, value) in fields {
            let value = match value {
                Value::Null => continue,
                Value::String(s) => s,
                other => other.to_string(),
            };
            self.query.insert(key, value);
        }
        Ok(self)
    }

    /// Set a JSON body
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Serialize a typed body
    pub fn json_from<T: Serialize>(self, body: &T) -> Result<Self> {
        let value = serde_json::to_value(body).map_err(Error::Encode)?;
        Ok(self.json(value))
    }

    /// Method that will actually be sent
    pub fn effective_method(&self) -> Method {
        self.method.unwrap_or_default()
    }

    /// True for requests without a method or with `GET`
    pub fn is_read(&self) -> bool {
        matches!(self.method, None | Some(Method::GET))
    }
}

/// Per-call options for the fetch engine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchOptions {
    /// Replaces `Failed to fetch <url>` in unexpected-status errors; the
    /// status code is always appended
    pub error_message: Option<String>,
}

impl FetchOptions {
    /// Create default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the unexpected-status message
    #[must_use]
    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }
}
