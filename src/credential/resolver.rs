//! API key resolver
//!
//! Resolves the key on every call so that changes to the fallback source are
//! picked up without restarting the client.

use super::types::{ApiKey, ApiKeyStatus};
use crate::config::API_KEY_VAR;
use crate::types::OptionStringExt;
use regex::Regex;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

/// Expected key shape: `tr_<env>_<token>`
static API_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^tr_[a-z]+_[a-zA-Z0-9]+$").unwrap());

/// Fallback lookup for configuration values that were not set explicitly
pub trait CredentialSource: Send + Sync + std::fmt::Debug {
    /// Look up a named value
    fn lookup(&self, name: &str) -> Option<String>;
}

/// Reads from the process environment at lookup time
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl CredentialSource for ProcessEnv {
    fn lookup(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Fixed set of values, mostly useful in tests
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    values: HashMap<String, String>,
}

impl StaticSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

impl CredentialSource for StaticSource {
    fn lookup(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }
}

/// Classifies API keys from explicit config or a fallback source
#[derive(Debug, Clone)]
pub struct CredentialResolver {
    source: Arc<dyn CredentialSource>,
}

impl CredentialResolver {
    /// Create a resolver backed by the given fallback source
    pub fn new(source: Arc<dyn CredentialSource>) -> Self {
        Self { source }
    }

    /// Create a resolver that falls back to the process environment
    pub fn from_env() -> Self {
        Self::new(Arc::new(ProcessEnv))
    }

    /// The fallback source
    pub fn source(&self) -> &Arc<dyn CredentialSource> {
        &self.source
    }

    /// Resolve and classify a key
    ///
    /// An explicit key wins over the fallback source, even when empty. An
    /// empty key is classified as missing.
    pub fn resolve(&self, explicit: Option<&str>) -> ApiKeyStatus {
        let raw = explicit
            .map(str::to_string)
            .or_else(|| self.source.lookup(API_KEY_VAR))
            .none_if_empty();

        match raw {
            None => ApiKeyStatus::Missing,
            Some(raw) if API_KEY_REGEX.is_match(&raw) => ApiKeyStatus::Valid {
                api_key: ApiKey::new(raw),
            },
            Some(raw) => ApiKeyStatus::Invalid { raw },
        }
    }
}

impl Default for CredentialResolver {
    fn default() -> Self {
        Self::from_env()
    }
}
