//! Card for one task in the task list and the moderation queue.

#[cfg(test)]
#[path = "task_card_test.rs"]
mod task_card_test;

use leptos::prelude::*;

use crate::components::status_badge::StatusBadge;
use crate::net::api::ApiClient;
use crate::net::types::{Task, TaskHistoryRow, TaskStatus};
use crate::state::remote::{RemoteData, load_into};
use crate::util::timestamp::format_timestamp;

/// Label for the status toggle button.
pub fn toggle_label(status: TaskStatus) -> &'static str {
    match status.toggled() {
        TaskStatus::Approved => "Approve",
        TaskStatus::Pending | TaskStatus::Rejected => "Reject",
    }
}

/// Short one-line summary of difficulty and subject.
pub fn task_meta(task: &Task) -> String {
    let subject = task.subject.trim();
    if subject.is_empty() {
        format!("Difficulty {}", task.difficulty)
    } else {
        format!("{subject} · difficulty {}", task.difficulty)
    }
}

/// One line describing the user's most recent attempt at a task.
pub fn latest_attempt_label(latest: Option<&TaskHistoryRow>) -> String {
    match latest {
        Some(row) => {
            let when = format_timestamp(&row.timestamp);
            if when.is_empty() {
                format!("Latest attempt: {} · score {}", row.status, row.score)
            } else {
                format!("Latest attempt: {} · score {} · {when}", row.status, row.score)
            }
        }
        None => "No attempts yet.".to_owned(),
    }
}

/// Task summary with action buttons. Each action is optional so the same
/// card serves the task list (toggle, delete) and moderation (approve, reject).
/// With `attempts` set, the card can look up the user's latest attempt.
#[component]
pub fn TaskCard(
    task: Task,
    #[prop(optional)] attempts: Option<ApiClient>,
    #[prop(optional)] on_toggle: Option<Callback<()>>,
    #[prop(optional)] on_delete: Option<Callback<()>>,
    #[prop(optional)] on_approve: Option<Callback<()>>,
    #[prop(optional)] on_reject: Option<Callback<()>>,
) -> impl IntoView {
    let meta = task_meta(&task);
    let toggle = toggle_label(task.status);
    let author = task.creator.as_ref().map(|u| format!("by {}", u.username));
    let answer = task.answer.clone().filter(|a| !a.trim().is_empty());
    let task_id = task.id;

    view! {
        <article class="task-card">
            <header class="task-card__header">
                <h3 class="task-card__title">{task.title}</h3>
                <StatusBadge status=task.status.as_str()/>
            </header>
            <p class="task-card__meta">{meta}</p>
            <p class="task-card__description">{task.description}</p>
            {answer.map(|a| view! { <p class="task-card__answer">"Answer: " {a}</p> })}
            {author.map(|a| view! { <p class="task-card__author">{a}</p> })}
            {attempts.map(|api| view! { <LatestAttempt api=api task_id=task_id/> })}
            <footer class="task-card__actions">
                {on_toggle
                    .map(|cb| {
                        view! {
                            <button class="btn btn--small" on:click=move |_| cb.run(())>
                                {toggle}
                            </button>
                        }
                    })}
                {on_approve
                    .map(|cb| {
                        view! {
                            <button class="btn btn--small btn--primary" on:click=move |_| cb.run(())>
                                "Approve"
                            </button>
                        }
                    })}
                {on_reject
                    .map(|cb| {
                        view! {
                            <button class="btn btn--small" on:click=move |_| cb.run(())>
                                "Reject"
                            </button>
                        }
                    })}
                {on_delete
                    .map(|cb| {
                        view! {
                            <button class="btn btn--small btn--danger" on:click=move |_| cb.run(())>
                                "Delete"
                            </button>
                        }
                    })}
            </footer>
        </article>
    }
}

/// Button that loads the latest attempt on demand, then shows it.
#[component]
fn LatestAttempt(api: ApiClient, task_id: i64) -> impl IntoView {
    let latest = RwSignal::new(RemoteData::<Option<TaskHistoryRow>>::default());
    let load = move |_| {
        let api = api.clone();
        load_into(latest, async move { api.my_latest_for_task(task_id).await });
    };
    let summary = move || {
        latest.with(|l| match (&l.error, &l.data) {
            (Some(e), _) => Some(format!("Could not load attempts: {e}")),
            (None, Some(row)) => Some(latest_attempt_label(row.as_ref())),
            (None, None) => None,
        })
    };

    view! {
        <div class="task-card__latest">
            <button class="btn btn--small btn--link" on:click=load disabled=move || latest.with(|l| l.loading)>
                "Latest attempt"
            </button>
            {move || summary().map(|text| view! { <span class="task-card__latest-text">{text}</span> })}
        </div>
    }
}
