use super::*;
use crate::net::test_support::ALICE_JSON;

#[test]
fn user_decodes_with_role_and_optional_timestamps() {
    let user: User = serde_json::from_str(ALICE_JSON).unwrap();
    assert_eq!(user.id, 1);
    assert_eq!(user.role, Role::Teacher);
    assert_eq!(user.created_at.as_deref(), Some("2025-01-02T03:04:05Z"));
    assert_eq!(user.updated_at, None);
}

#[test]
fn role_permissions() {
    assert!(!Role::Student.can_moderate());
    assert!(!Role::Teacher.can_moderate());
    assert!(Role::Moderator.can_moderate());
    assert!(Role::Admin.can_moderate());
    assert!(!Role::Moderator.can_manage_users());
    assert!(Role::Admin.can_manage_users());
}

#[test]
fn task_status_toggle_matches_card_action() {
    assert_eq!(TaskStatus::Approved.toggled(), TaskStatus::Rejected);
    assert_eq!(TaskStatus::Rejected.toggled(), TaskStatus::Approved);
    assert_eq!(TaskStatus::Pending.toggled(), TaskStatus::Approved);
}

#[test]
fn task_update_skips_unset_fields() {
    let patch = TaskUpdate { status: Some(TaskStatus::Rejected), ..TaskUpdate::default() };
    assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"status":"REJECTED"}"#);
}

#[test]
fn history_row_tolerates_missing_optional_fields() {
    let row: TaskHistoryRow =
        serde_json::from_str(r#"{"id":1,"user_id":2,"task_id":3,"status":"checked","score":4.5}"#).unwrap();
    assert_eq!(row.status, "checked");
    assert!((row.score - 4.5).abs() < f64::EPSILON);
    assert!(row.task.is_none());
    assert!(row.timestamp.is_empty());
}

#[test]
fn task_decodes_minimal_payload() {
    let task: Task = serde_json::from_str(
        r#"{"id":5,"title":"Sum","difficulty":2,"status":"PENDING","creator_id":1}"#,
    )
    .unwrap();
    assert_eq!(task.status, TaskStatus::Pending);
    assert!(task.description.is_empty());
    assert!(task.creator.is_none());
}
