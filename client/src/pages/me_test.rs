use super::*;
use crate::net::test_support::{sample_history, sample_task};

#[test]
fn quick_actions_follow_role() {
    let hrefs = |role| quick_actions(role).into_iter().map(|a| a.href).collect::<Vec<_>>();
    assert_eq!(hrefs(Some(Role::Student)), vec!["/tasks", "/task-history"]);
    assert_eq!(hrefs(Some(Role::Moderator)), vec!["/tasks", "/task-history", "/moderation"]);
    assert_eq!(hrefs(Some(Role::Admin)), vec!["/tasks", "/task-history", "/moderation", "/users"]);
}

#[test]
fn my_tasks_filters_by_creator() {
    let tasks = vec![
        sample_task(1, 7, TaskStatus::Pending),
        sample_task(2, 8, TaskStatus::Approved),
        sample_task(3, 7, TaskStatus::Approved),
    ];
    let ids: Vec<i64> = my_tasks(&tasks, Some(7)).iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 3]);
    assert!(my_tasks(&tasks, None).is_empty());
}

#[test]
fn drafts_keep_pending_only() {
    let tasks = vec![sample_task(1, 7, TaskStatus::Pending), sample_task(2, 7, TaskStatus::Rejected)];
    let ids: Vec<i64> = drafts(&tasks).iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1]);
}

#[test]
fn approved_sorted_by_updated_then_created_desc() {
    let mut old = sample_task(1, 7, TaskStatus::Approved);
    old.created_at = Some("2025-01-01T00:00:00Z".to_owned());
    let mut updated = sample_task(2, 7, TaskStatus::Approved);
    updated.created_at = Some("2024-01-01T00:00:00Z".to_owned());
    updated.updated_at = Some("2025-06-01T00:00:00Z".to_owned());
    let undated = sample_task(3, 7, TaskStatus::Approved);
    let pending = sample_task(4, 7, TaskStatus::Pending);

    let ids: Vec<i64> = approved_newest_first(&[undated, old, pending, updated]).iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![2, 1, 3]);
}

#[test]
fn chart_series_takes_last_twelve_in_chronological_order() {
    // API order: newest first, ids 20 down to 1.
    let history: Vec<_> = (1..=20).rev().map(|i| sample_history(i, i, f64::from(i32::try_from(i).unwrap()), "")).collect();
    let series = chart_series(&history);
    assert_eq!(series.len(), 12);
    assert!((series[0].score - 9.0).abs() < f64::EPSILON);
    assert!((series[11].score - 20.0).abs() < f64::EPSILON);
}

#[test]
fn chart_series_keeps_short_history() {
    let history = vec![sample_history(2, 1, 3.0, "2025-03-02T10:00:00Z"), sample_history(1, 1, 1.0, "2025-03-01T10:00:00Z")];
    let series = chart_series(&history);
    assert_eq!(series, vec![
        ChartPoint { label: "2025-03-01".to_owned(), score: 1.0 },
        ChartPoint { label: "2025-03-02".to_owned(), score: 3.0 },
    ]);
}

#[test]
fn recent_rows_limit_to_five_and_prefer_task_title() {
    let mut history: Vec<_> = (1..=8).map(|i| sample_history(i, 40 + i, 1.0, "")).collect();
    history[0].task = Some(sample_task(41, 7, TaskStatus::Approved));
    let rows = recent_rows(&history);
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].cells[1], TableCell::Text("Task 41".to_owned()));
    assert_eq!(rows[1].cells[1], TableCell::Text("42".to_owned()));
}

#[test]
fn task_rows_prefix_difficulty() {
    let rows = task_rows(&[sample_task(5, 7, TaskStatus::Rejected)]);
    assert_eq!(rows[0].cells[3], TableCell::Text("#2".to_owned()));
    assert_eq!(rows[0].cells[4], TableCell::Status("REJECTED".to_owned()));
}
