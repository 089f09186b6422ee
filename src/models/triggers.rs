//! Trigger sources, trigger registrations and schedules

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

// ============================================================================
// Sources
// ============================================================================

/// Identifies a trigger source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerSource {
    pub id: String,
    pub key: String,
}

/// Body for updating a trigger source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTriggerSourceBodyV2 {
    pub registered_events: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Registered option values, keyed by option name (always includes `event`)
    #[serde(default)]
    pub options: BTreeMap<String, Vec<String>>,
}

// ============================================================================
// Trigger registrations
// ============================================================================

/// One event name or a list of them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventName {
    One(String),
    Many(Vec<String>),
}

/// Filter describing which events fire a trigger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRule {
    pub event: EventName,
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Value>,
}

/// Transport a source receives events over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SourceChannel {
    Http,
    Sqs,
    Smtp,
}

/// Job that registers the source with the third party
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterSourceJob {
    pub id: String,
    pub version: String,
}

/// Source description sent when registering a trigger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMetadataV2 {
    pub version: String,
    pub channel: SourceChannel,
    pub integration: Value,
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
    #[serde(default)]
    pub options: BTreeMap<String, Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub register_source_job: Option<RegisterSourceJob>,
}

/// Body for registering a trigger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTriggerBodyV2 {
    pub rule: EventRule,
    pub source: SourceMetadataV2,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
}

/// Channel details of a registered source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum RegisterSourceChannel {
    Http { url: String },
    Smtp,
    Sqs,
}

/// A registered trigger source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTriggerSource {
    pub key: String,
    pub params: Value,
    pub active: bool,
    pub secret: String,
    pub data: Option<Value>,
    pub channel: RegisterSourceChannel,
    pub client_id: Option<String>,
}

/// How registered option values differ from the desired ones
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionsDiff {
    pub desired: Vec<String>,
    #[serde(default)]
    pub missing: Vec<String>,
    #[serde(default)]
    pub orphaned: Vec<String>,
}

/// Result of registering a trigger
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterSourceEventV2 {
    pub id: String,
    pub source: RegisterTriggerSource,
    #[serde(default)]
    pub options: BTreeMap<String, OptionsDiff>,
    pub dynamic_trigger_id: Option<String>,
}

// ============================================================================
// Schedules
// ============================================================================

/// Fixed-interval schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntervalOptions {
    pub seconds: u64,
}

/// Cron schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CronOptions {
    pub cron: String,
}

/// When a scheduled job fires
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "options", rename_all = "lowercase")]
pub enum Schedule {
    Interval(IntervalOptions),
    Cron(CronOptions),
}

/// A schedule plus caller metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleMetadata {
    #[serde(flatten)]
    pub schedule: Schedule,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
}

impl ScheduleMetadata {
    /// Every `seconds` seconds
    pub fn interval(seconds: u64) -> Self {
        Self {
            schedule: Schedule::Interval(IntervalOptions { seconds }),
            metadata: None,
            account_id: None,
        }
    }

    /// On a cron expression
    pub fn cron(expression: impl Into<String>) -> Self {
        Self {
            schedule: Schedule::Cron(CronOptions {
                cron: expression.into(),
            }),
            metadata: None,
            account_id: None,
        }
    }
}

/// Wire body of a schedule registration: the metadata plus the registration key as `id`
#[derive(Debug, Serialize)]
pub struct RegisterScheduleBody<'a> {
    pub id: &'a str,
    #[serde(flatten)]
    pub metadata: &'a ScheduleMetadata,
}

/// Result of registering a schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterScheduleResponseBody {
    pub id: String,
    pub schedule: ScheduleMetadata,
    #[serde(default)]
    pub metadata: Option<Value>,
    pub active: bool,
}

/// Bare acknowledgement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OkResponse {
    pub ok: bool,
}
