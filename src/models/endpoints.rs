//! Endpoint registration

use serde::{Deserialize, Serialize};

/// Body for registering an endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterEndpointBody {
    pub url: String,
    pub name: String,
}

/// A registered endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointRecord {
    pub id: String,
    pub name: String,
    pub url: String,
}
