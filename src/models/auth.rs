//! Connection auth

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Kind of credentials stored for a connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionAuthType {
    #[default]
    Oauth2,
}

/// Credentials for an integration connection
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionAuth {
    #[serde(rename = "type")]
    pub kind: ConnectionAuthType,
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_fields: Option<BTreeMap<String, String>>,
}

impl std::fmt::Debug for ConnectionAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionAuth")
            .field("kind", &self.kind)
            .field("access_token", &"***")
            .field("scopes", &self.scopes)
            .finish_non_exhaustive()
    }
}
