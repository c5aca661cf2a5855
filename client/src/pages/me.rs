//! Profile page: account card, quick actions, and the user's own work.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the user's history and the full task list once, then derives every
//! tab client-side from the session's user id.

#[cfg(test)]
#[path = "me_test.rs"]
mod me_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::app::AppSession;
use crate::components::banner_error::ErrorBanner;
use crate::components::data_table::{DataTable, TableCell, TableRow};
use crate::components::score_chart::{ChartPoint, ScoreChart};
use crate::net::types::{Role, Task, TaskHistoryRow, TaskStatus, User};
use crate::state::remote::{RemoteData, load_into};
use crate::state::session::SessionState;
use crate::util::timestamp::{format_date, format_timestamp, parse_timestamp};

const RECENT_ROWS: usize = 5;
const CHART_ROWS: usize = 12;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum MeTab {
    Overview,
    Drafts,
    Approved,
}

/// Role-dependent shortcut card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct QuickAction {
    pub href: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub(crate) fn quick_actions(role: Option<Role>) -> Vec<QuickAction> {
    let mut actions = vec![
        QuickAction { href: "/tasks", title: "Tasks", desc: "Create and manage tasks" },
        QuickAction { href: "/task-history", title: "History", desc: "Review your submitted solutions" },
    ];
    if role.is_some_and(Role::can_moderate) {
        actions.push(QuickAction { href: "/moderation", title: "Moderation", desc: "Review tasks and change their status" });
    }
    if role.is_some_and(Role::can_manage_users) {
        actions.push(QuickAction { href: "/users", title: "Users", desc: "User list and roles" });
    }
    actions
}

pub(crate) fn my_tasks(tasks: &[Task], user_id: Option<i64>) -> Vec<Task> {
    let Some(user_id) = user_id else {
        return Vec::new();
    };
    tasks.iter().filter(|t| t.creator_id == user_id).cloned().collect()
}

pub(crate) fn drafts(tasks: &[Task]) -> Vec<Task> {
    tasks.iter().filter(|t| t.status == TaskStatus::Pending).cloned().collect()
}

/// Approved tasks, most recently updated (else created) first.
/// Tasks without a readable timestamp go last.
pub(crate) fn approved_newest_first(tasks: &[Task]) -> Vec<Task> {
    let mut approved: Vec<Task> = tasks.iter().filter(|t| t.status == TaskStatus::Approved).cloned().collect();
    approved.sort_by_cached_key(|t| {
        std::cmp::Reverse(
            t.updated_at
                .as_deref()
                .or(t.created_at.as_deref())
                .and_then(parse_timestamp),
        )
    });
    approved
}

/// Last `CHART_ROWS` rows, oldest first. The API lists newest first.
pub(crate) fn chart_series(history: &[TaskHistoryRow]) -> Vec<ChartPoint> {
    let skip = history.len().saturating_sub(CHART_ROWS);
    history
        .iter()
        .rev()
        .skip(skip)
        .map(|r| ChartPoint { label: format_date(&r.timestamp), score: r.score })
        .collect()
}

/// Columns: id, task, status, score, time.
pub(crate) fn recent_rows(history: &[TaskHistoryRow]) -> Vec<TableRow> {
    history
        .iter()
        .take(RECENT_ROWS)
        .map(|r| TableRow {
            key: r.id.to_string(),
            cells: vec![
                TableCell::Text(r.id.to_string()),
                TableCell::Text(r.task.as_ref().map_or_else(|| r.task_id.to_string(), |t| t.title.clone())),
                TableCell::Status(r.status.clone()),
                TableCell::Strong(r.score.to_string()),
                TableCell::Text(format_timestamp(&r.timestamp)),
            ],
        })
        .collect()
}

/// Columns: id, title, subject, difficulty, status.
pub(crate) fn task_rows(tasks: &[Task]) -> Vec<TableRow> {
    tasks
        .iter()
        .map(|t| TableRow {
            key: t.id.to_string(),
            cells: vec![
                TableCell::Text(t.id.to_string()),
                TableCell::Text(t.title.clone()),
                TableCell::Text(t.subject.clone()),
                TableCell::Text(format!("#{}", t.difficulty)),
                TableCell::Status(t.status.as_str().to_owned()),
            ],
        })
        .collect()
}

#[component]
pub fn MePage(session: AppSession) -> impl IntoView {
    let auth = session.state;
    let api = session.api();
    let history = RwSignal::new(RemoteData::<Vec<TaskHistoryRow>>::default());
    let tasks = RwSignal::new(RemoteData::<Vec<Task>>::default());
    let tab = RwSignal::new(MeTab::Overview);

    Effect::new(move || {
        let history_api = api.clone();
        load_into(history, async move { history_api.my_history().await });
        let tasks_api = api.clone();
        load_into(tasks, async move { tasks_api.list_tasks().await });
    });

    let user = move || auth.with(|s| s.user.clone());
    let mine = Memo::new(move |_| {
        let user_id = auth.with(|s| s.user.as_ref().map(|u| u.id));
        tasks.with(|t| my_tasks(t.data.as_deref().unwrap_or_default(), user_id))
    });

    let history_loading = Signal::derive(move || history.with(|h| h.loading));
    let tasks_loading = Signal::derive(move || tasks.with(|t| t.loading));
    let history_error = Signal::derive(move || history.with(|h| h.error.clone()));
    let tasks_error = Signal::derive(move || tasks.with(|t| t.error.clone()));
    let recent = Signal::derive(move || history.with(|h| recent_rows(h.data.as_deref().unwrap_or_default())));
    let chart = Signal::derive(move || history.with(|h| chart_series(h.data.as_deref().unwrap_or_default())));
    let all_rows = Signal::derive(move || mine.with(|m| task_rows(m)));
    let draft_rows = Signal::derive(move || mine.with(|m| task_rows(&drafts(m))));
    let approved_rows = Signal::derive(move || mine.with(|m| task_rows(&approved_newest_first(m))));

    let field = move |pick: fn(&User) -> String| {
        move || user().map(|u| pick(&u)).filter(|v| !v.is_empty()).unwrap_or_else(|| "—".to_owned())
    };

    let tab_button = move |target: MeTab, label: &'static str| {
        view! {
            <button class="tab" class:tab--active=move || tab.get() == target on:click=move |_| tab.set(target)>
                {label}
            </button>
        }
    };

    let panel = move || match tab.get() {
        MeTab::Overview => view! {
            <div class="panel">
                <div class="panel__header">
                    <h2>"My history (last 5)"</h2>
                    <a href="/task-history">"Full history"</a>
                </div>
                <ErrorBanner message=history_error/>
                <DataTable
                    headers=vec!["ID", "Task", "Status", "Score", "Time"]
                    rows=recent
                    loading=history_loading
                    empty="No attempts yet."
                />
                <ScoreChart points=chart/>
            </div>
            <div class="panel">
                <div class="panel__header">
                    <h2>"My tasks"</h2>
                    <a href="/tasks">"All tasks"</a>
                </div>
                <ErrorBanner message=tasks_error/>
                <DataTable
                    headers=vec!["ID", "Title", "Subject", "Difficulty", "Status"]
                    rows=all_rows
                    loading=tasks_loading
                    empty="No tasks to show."
                />
            </div>
        }
        .into_any(),
        MeTab::Drafts => view! {
            <div class="panel">
                <div class="panel__header">
                    <h2>"Drafts (PENDING)"</h2>
                    <a href="/tasks">"Go to tasks"</a>
                </div>
                <ErrorBanner message=tasks_error/>
                <DataTable
                    headers=vec!["ID", "Title", "Subject", "Difficulty", "Status"]
                    rows=draft_rows
                    loading=tasks_loading
                    empty="No tasks to show."
                />
            </div>
        }
        .into_any(),
        MeTab::Approved => view! {
            <div class="panel">
                <div class="panel__header">
                    <h2>"Recently approved"</h2>
                    <a href="/tasks">"Go to tasks"</a>
                </div>
                <ErrorBanner message=tasks_error/>
                <DataTable
                    headers=vec!["ID", "Title", "Subject", "Difficulty", "Status"]
                    rows=approved_rows
                    loading=tasks_loading
                    empty="No tasks to show."
                />
            </div>
        }
        .into_any(),
    };

    view! {
        <section class="page me-page">
            <div class="profile-card">
                <h1>"My account"</h1>
                <p class="profile-card__greeting">
                    {move || match user() {
                        Some(u) if !u.username.is_empty() => format!("Hi, {}!", u.username),
                        _ => "Hi!".to_owned(),
                    }}
                    " Your role: "
                    <strong>{move || auth.with(|s| s.role().map_or("—", Role::as_str))}</strong>
                </p>
                <dl class="profile-card__fields">
                    <div><dt>"Email"</dt><dd>{field(|u| u.email.clone())}</dd></div>
                    <div><dt>"Username"</dt><dd>{field(|u| u.username.clone())}</dd></div>
                    <div><dt>"Role"</dt><dd>{field(|u| u.role.as_str().to_owned())}</dd></div>
                </dl>
            </div>
            <div class="quick-actions">
                {move || {
                    quick_actions(auth.with(SessionState::role))
                        .into_iter()
                        .map(|action| {
                            view! {
                                <article class="quick-action">
                                    <span class="quick-action__kicker">"Action"</span>
                                    <h3>{action.title}</h3>
                                    <p>{action.desc}</p>
                                    <a class="btn btn--small" href=action.href>"Open"</a>
                                </article>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <div class="tabs">
                {tab_button(MeTab::Overview, "Overview")}
                {tab_button(MeTab::Drafts, "Drafts")}
                {tab_button(MeTab::Approved, "Approved")}
            </div>
            {panel}
        </section>
    }
}
