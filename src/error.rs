//! Error types for the Trigger client
//!
//! This module defines the error hierarchy for the entire client.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for the Trigger client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Credential Errors
    // ============================================================================
    #[error("Missing API key, set TRIGGER_API_KEY or pass an explicit api key")]
    MissingApiKey,

    #[error("Invalid API key (\"{raw}\"), expected the form tr_<env>_<token>")]
    InvalidApiKey { raw: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// 4xx response carrying the server's `error` message verbatim
    #[error("{message}")]
    ClientRequest { status: u16, message: String },

    #[error("{message}")]
    UnexpectedStatus { status: u16, message: String },

    // ============================================================================
    // Decoding Errors
    // ============================================================================
    #[error("Unknown version {version}")]
    UnknownResponseVersion { version: String },

    #[error("Response from {url} did not match the expected shape: {message}")]
    SchemaValidation { url: String, message: String },

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an invalid API key error
    pub fn invalid_api_key(raw: impl Into<String>) -> Self {
        Self::InvalidApiKey { raw: raw.into() }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a client request (4xx) error
    pub fn client_request(status: u16, message: impl Into<String>) -> Self {
        Self::ClientRequest {
            status,
            message: message.into(),
        }
    }

    /// Create an unexpected status error
    pub fn unexpected_status(status: u16, message: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status,
            message: message.into(),
        }
    }

    /// Create an unknown response version error
    pub fn unknown_version(version: impl Into<String>) -> Self {
        Self::UnknownResponseVersion {
            version: version.into(),
        }
    }

    /// Create a schema validation error
    pub fn schema_validation(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SchemaValidation {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// HTTP status code reported by the server, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::ClientRequest { status, .. } | Error::UnexpectedStatus { status, .. } => {
                Some(*status)
            }
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True when the error was raised before any request was sent
    pub fn is_credential_error(&self) -> bool {
        matches!(self, Error::MissingApiKey | Error::InvalidApiKey { .. })
    }

    /// True when the server rejected the request input
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::ClientRequest { .. })
    }

    /// True when the server answered but the client could not understand the body
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Error::UnknownResponseVersion { .. }
                | Error::SchemaValidation { .. }
                | Error::Decode { .. }
        )
    }
}

/// Result type alias for the Trigger client
pub type Result<T> = std::result::Result<T, Error>;
