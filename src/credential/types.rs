//! Credential types

use crate::error::{Error, Result};

/// A well-formed API key of the form `tr_<env>_<token>`
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub(crate) fn new(raw: String) -> Self {
        Self(raw)
    }

    /// The full key, suitable for a bearer `Authorization` header
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The environment segment (`dev`, `prod`, ...)
    pub fn environment(&self) -> &str {
        self.0.split('_').nth(1).unwrap_or_default()
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ApiKey(tr_{}_***)", self.environment())
    }
}

/// Classification of a resolved API key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiKeyStatus {
    /// Key matches the expected format
    Valid { api_key: ApiKey },
    /// Key was supplied but has the wrong shape
    Invalid { raw: String },
    /// No key was supplied anywhere
    Missing,
}

impl ApiKeyStatus {
    /// Check if the key is usable
    pub fn is_valid(&self) -> bool {
        matches!(self, ApiKeyStatus::Valid { .. })
    }

    /// Convert into the key, or the matching credential error
    pub fn into_result(self) -> Result<ApiKey> {
        match self {
            ApiKeyStatus::Valid { api_key } => Ok(api_key),
            ApiKeyStatus::Invalid { raw } => Err(Error::InvalidApiKey { raw }),
            ApiKeyStatus::Missing => Err(Error::MissingApiKey),
        }
    }
}
