//! Request and response models
//!
//! These are the schemas the fetch engine validates responses against, and
//! the bodies and options the API client sends. Field names follow the wire
//! format (camelCase) via serde.

mod auth;
mod endpoints;
mod events;
mod runs;
mod tasks;
mod triggers;

pub use auth::{ConnectionAuth, ConnectionAuthType};
pub use endpoints::{EndpointRecord, RegisterEndpointBody};
pub use events::{ApiEventLog, EventRun, GetEvent, SendEvent, SendEventBody, SendEventOptions};
pub use runs::{
    GetRun, GetRunOptions, GetRunStatuses, GetRuns, GetRunsOptions, JobRunStatusRecord, Run,
    RunStatus, RunStatusSummary, RunTaskSummary, StatusHistoryEntry, StatusState, StatusUpdate,
};
pub use tasks::{
    CachedTask, CachedTasks, CompleteTaskBodyInput, DisplayProperty, ErrorWithStack,
    FailTaskBodyInput, RedactOptions, RetryOptions, RunTaskBodyInput, RunTaskResponse,
    RunTaskResponseWithCachedTasksBody, ServerTask, TaskStatus, TaskStyle,
};
pub use triggers::{
    CronOptions, EventName, EventRule, IntervalOptions, OkResponse, OptionsDiff,
    RegisterScheduleBody, RegisterScheduleResponseBody, RegisterSourceChannel,
    RegisterSourceEventV2, RegisterSourceJob, RegisterTriggerBodyV2, RegisterTriggerSource,
    Schedule, ScheduleMetadata, SourceChannel, SourceMetadataV2, TriggerSource,
    UpdateTriggerSourceBodyV2,
};

#[cfg(test)]
mod tests;
