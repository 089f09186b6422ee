//! Tests for the models module

use super::*;
use crate::schema::{decode_versioned, ResponseVersion, VersionedResponse};
use pretty_assertions::assert_eq;
use serde_json::json;

fn server_task_json() -> serde_json::Value {
    json!({
        "id": "task_1",
        "name": "send-email",
        "icon": null,
        "noop": false,
        "startedAt": "2023-10-01T12:00:00Z",
        "completedAt": null,
        "status": "RUNNING",
        "params": {"to": "user@example.com"},
        "output": null,
        "parentId": null
    })
}

// ============================================================================
// Tasks
// ============================================================================

#[test]
fn test_server_task_decodes_with_missing_optionals() {
    let task: ServerTask = serde_json::from_value(server_task_json()).unwrap();
    assert_eq!(task.id, "task_1");
    assert_eq!(task.status, TaskStatus::Running);
    assert!(task.started_at.is_some());
    assert!(task.delay_until.is_none());
    assert!(task.properties.is_none());
}

#[test]
fn test_server_task_rejects_unknown_status() {
    let mut value = server_task_json();
    value["status"] = json!("EXPLODED");
    assert!(serde_json::from_value::<ServerTask>(value).is_err());
}

#[test]
fn test_run_task_body_serializes_camel_case_without_nones() {
    let body = RunTaskBodyInput::new("idem_1", "send-email")
        .params(json!({"to": "a@b.c"}))
        .parent_id("task_0");

    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({
            "idempotencyKey": "idem_1",
            "name": "send-email",
            "noop": false,
            "params": {"to": "a@b.c"},
            "parentId": "task_0"
        })
    );
}

#[test]
fn test_fail_task_body() {
    let body = FailTaskBodyInput::message("boom");
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({"error": {"message": "boom"}})
    );
}

#[test]
fn test_run_task_response_unversioned() {
    let response: RunTaskResponse = decode_versioned(None, server_task_json(), "u").unwrap();
    assert_eq!(response.version(), ResponseVersion::Unversioned);
    assert_eq!(response.task().name, "send-email");
    assert!(response.cached_tasks().is_none());
}

#[test]
fn test_run_task_response_with_cached_tasks() {
    let body = json!({
        "task": server_task_json(),
        "cachedTasks": {
            "tasks": [
                {"id": "task_0", "idempotencyKey": "idem_0", "status": "COMPLETED", "output": {"ok": true}}
            ],
            "cursor": "task_0"
        }
    });

    let response: RunTaskResponse = decode_versioned(Some("2023-09-29"), body, "u").unwrap();
    assert_eq!(response.version().as_str(), "2023-09-29");

    let cached = response.cached_tasks().unwrap();
    assert_eq!(cached.tasks.len(), 1);
    assert_eq!(cached.tasks[0].idempotency_key, "idem_0");
    assert!(!cached.tasks[0].noop);
    assert_eq!(cached.cursor.as_deref(), Some("task_0"));
    assert_eq!(response.into_task().id, "task_1");
}

// ============================================================================
// Events
// ============================================================================

#[test]
fn test_send_event_body() {
    let event = SendEvent::new("user.created", json!({"id": 1})).id("evt_1");
    let options = SendEventOptions {
        deliver_after: Some(60),
        ..Default::default()
    };
    let body = SendEventBody {
        event: &event,
        options: &options,
    };

    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({
            "event": {"name": "user.created", "payload": {"id": 1}, "id": "evt_1"},
            "options": {"deliverAfter": 60}
        })
    );
}

#[test]
fn test_get_event_decodes_runs() {
    let event: GetEvent = serde_json::from_value(json!({
        "id": "evt_1",
        "name": "user.created",
        "createdAt": "2023-10-01T12:00:00Z",
        "updatedAt": "2023-10-01T12:00:01Z",
        "runs": [{"id": "run_1", "status": "WAITING_ON_CONNECTIONS"}]
    }))
    .unwrap();

    assert_eq!(event.runs[0].status, RunStatus::WaitingOnConnections);
    assert!(event.runs[0].started_at.is_none());
}

// ============================================================================
// Runs
// ============================================================================

#[test]
fn test_get_run_flattens_run_fields() {
    let run: GetRun = serde_json::from_value(json!({
        "id": "run_1",
        "status": "SUCCESS",
        "startedAt": "2023-10-01T12:00:00Z",
        "completedAt": "2023-10-01T12:05:00Z",
        "output": {"sent": true},
        "tasks": [{
            "id": "task_1",
            "name": "send-email",
            "status": "COMPLETED",
            "subtasks": []
        }],
        "nextCursor": "task_1"
    }))
    .unwrap();

    assert_eq!(run.run.id, "run_1");
    assert!(run.run.status.is_finished());
    assert_eq!(run.tasks[0].subtasks.as_deref(), Some(&[][..]));
    assert!(run.statuses.is_empty());
    assert_eq!(run.next_cursor.as_deref(), Some("task_1"));
}

#[test]
fn test_run_status_is_finished() {
    assert!(RunStatus::Canceled.is_finished());
    assert!(RunStatus::InvalidPayload.is_finished());
    assert!(!RunStatus::Executing.is_finished());
    assert!(!RunStatus::Queued.is_finished());
}

#[test]
fn test_get_run_options_serialize_only_set_fields() {
    assert_eq!(serde_json::to_value(GetRunOptions::default()).unwrap(), json!({}));

    let options = GetRunOptions {
        subtasks: Some(true),
        cursor: Some("task_9".to_string()),
        take: Some(50),
        task_details: Some(false),
    };
    assert_eq!(
        serde_json::to_value(&options).unwrap(),
        json!({"subtasks": true, "cursor": "task_9", "take": 50, "taskdetails": false})
    );
}

#[test]
fn test_get_runs_options_serialize_only_set_fields() {
    let options = GetRunsOptions {
        cursor: None,
        take: Some(10),
    };
    assert_eq!(serde_json::to_value(&options).unwrap(), json!({"take": 10}));
}

#[test]
fn test_status_update_and_record() {
    let update = StatusUpdate {
        label: Some("Uploading".to_string()),
        state: Some(StatusState::Loading),
        data: None,
    };
    assert_eq!(
        serde_json::to_value(&update).unwrap(),
        json!({"label": "Uploading", "state": "loading"})
    );

    let record: JobRunStatusRecord = serde_json::from_value(json!({
        "key": "upload",
        "label": "Uploading",
        "state": "success",
        "data": {"progress": 1.0},
        "history": [{"label": "Starting", "state": "loading"}]
    }))
    .unwrap();
    assert_eq!(record.state, Some(StatusState::Success));
    assert_eq!(record.history.len(), 1);
    assert!(record.history[0].data.is_none());
}

// ============================================================================
// Triggers / schedules / auth
// ============================================================================

#[test]
fn test_schedule_metadata_wire_format() {
    let mut metadata = ScheduleMetadata::cron("0 * * * *");
    metadata.account_id = Some("acct_1".to_string());

    let value = serde_json::to_value(&metadata).unwrap();
    assert_eq!(
        value,
        json!({"type": "cron", "options": {"cron": "0 * * * *"}, "accountId": "acct_1"})
    );

    let parsed: ScheduleMetadata = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, metadata);
}

#[test]
fn test_register_schedule_body_merges_key_as_id() {
    let metadata = ScheduleMetadata::interval(300);
    let body = RegisterScheduleBody {
        id: "dynamic-key",
        metadata: &metadata,
    };

    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({"id": "dynamic-key", "type": "interval", "options": {"seconds": 300}})
    );
}

#[test]
fn test_register_source_event_decodes_channel() {
    let event: RegisterSourceEventV2 = serde_json::from_value(json!({
        "id": "src_1",
        "source": {
            "key": "github.issues",
            "params": {"repo": "acme/app"},
            "active": true,
            "secret": "shh",
            "channel": {"type": "HTTP", "url": "https://hooks.example.com/1"}
        },
        "options": {"event": {"desired": ["issues"], "missing": ["issues"]}}
    }))
    .unwrap();

    assert_eq!(
        event.source.channel,
        RegisterSourceChannel::Http {
            url: "https://hooks.example.com/1".to_string()
        }
    );
    assert_eq!(event.options["event"].missing, vec!["issues".to_string()]);
    assert!(event.options["event"].orphaned.is_empty());
    assert!(event.dynamic_trigger_id.is_none());
}

#[test]
fn test_event_name_untagged() {
    let one: EventName = serde_json::from_value(json!("push")).unwrap();
    assert_eq!(one, EventName::One("push".to_string()));

    let many: EventName = serde_json::from_value(json!(["push", "pull"])).unwrap();
    assert!(matches!(many, EventName::Many(ref names) if names.len() == 2));
}

#[test]
fn test_connection_auth_debug_hides_token() {
    let auth: ConnectionAuth = serde_json::from_value(json!({
        "type": "oauth2",
        "accessToken": "gho_secret",
        "scopes": ["repo"]
    }))
    .unwrap();

    assert_eq!(auth.kind, ConnectionAuthType::Oauth2);
    assert!(!format!("{auth:?}").contains("gho_secret"));
}
