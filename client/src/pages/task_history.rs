//! The current user's solution history with client-side paging.

#[cfg(test)]
#[path = "task_history_test.rs"]
mod task_history_test;

use leptos::prelude::*;

use crate::app::AppSession;
use crate::components::banner_error::ErrorBanner;
use crate::components::data_table::{DataTable, TableCell, TableRow};
use crate::net::types::TaskHistoryRow;
use crate::state::pagination::Pagination;
use crate::state::remote::{RemoteData, load_into};
use crate::util::timestamp::format_timestamp;

/// Columns: id, user, task, status, score, time.
pub(crate) fn history_rows(rows: &[TaskHistoryRow]) -> Vec<TableRow> {
    rows.iter()
        .map(|r| TableRow {
            key: r.id.to_string(),
            cells: vec![
                TableCell::Text(r.id.to_string()),
                TableCell::Text(r.user_id.to_string()),
                TableCell::Text(r.task_id.to_string()),
                TableCell::Status(r.status.clone()),
                TableCell::Strong(r.score.to_string()),
                TableCell::Text(format_timestamp(&r.timestamp)),
            ],
        })
        .collect()
}

/// Which history listing the filter inputs select.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum HistoryQuery {
    All,
    Status(String),
    Task(i64),
}

/// A valid task id wins over the status filter; blank inputs list everything.
pub(crate) fn history_query(status: &str, task: &str) -> HistoryQuery {
    if let Some(id) = task.trim().parse::<i64>().ok().filter(|id| *id > 0) {
        return HistoryQuery::Task(id);
    }
    let status = status.trim();
    if status.is_empty() { HistoryQuery::All } else { HistoryQuery::Status(status.to_owned()) }
}

#[component]
pub fn TaskHistoryPage(session: AppSession) -> impl IntoView {
    let api = session.api();
    let history = RwSignal::new(RemoteData::<Vec<TaskHistoryRow>>::default());
    let pager = RwSignal::new(Pagination::default());
    let status_filter = RwSignal::new(String::new());
    let task_filter = RwSignal::new(String::new());

    let reload = Callback::new(move |()| {
        let api = api.clone();
        let query = history_query(&status_filter.get_untracked(), &task_filter.get_untracked());
        load_into(history, async move {
            match query {
                HistoryQuery::All => api.my_history().await,
                HistoryQuery::Status(status) => api.my_history_by_status(&status).await,
                HistoryQuery::Task(id) => api.my_history_for_task(id).await,
            }
        });
    });
    Effect::new(move || reload.run(()));

    Effect::new(move || {
        let total = history.with(|h| h.data.as_ref().map_or(0, Vec::len));
        pager.update(|p| p.set_total(total));
    });

    let rows = Signal::derive(move || {
        history.with(|h| {
            let items = h.data.as_deref().unwrap_or_default();
            pager.with(|p| history_rows(p.slice(items)))
        })
    });
    let loading = Signal::derive(move || history.with(|h| h.loading));
    let error = Signal::derive(move || history.with(|h| h.error.clone()));

    view! {
        <section class="page history-page">
            <header class="page__header">
                <h1>"Solution history"</h1>
                <form
                    class="page__actions"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        reload.run(());
                    }
                >
                    <input
                        class="filter-input"
                        type="text"
                        placeholder="Filter by status"
                        prop:value=move || status_filter.get()
                        on:input=move |ev| status_filter.set(event_target_value(&ev))
                    />
                    <input
                        class="filter-input filter-input--narrow"
                        type="number"
                        min="1"
                        placeholder="Task ID"
                        prop:value=move || task_filter.get()
                        on:input=move |ev| task_filter.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit" disabled=move || loading.get()>"Refresh"</button>
                </form>
            </header>
            <ErrorBanner message=error/>
            <DataTable
                headers=vec!["ID", "User", "Task", "Status", "Score", "Time"]
                rows=rows
                loading=loading
                empty="No attempts yet."
            />
            <nav class="pager">
                <button class="btn btn--small" disabled=move || !pager.with(Pagination::has_prev) on:click=move |_| pager.update(Pagination::prev)>
                    "Previous"
                </button>
                <span class="pager__label">
                    {move || pager.with(|p| format!("Page {} of {}", p.page, p.pages()))}
                </span>
                <button class="btn btn--small" disabled=move || !pager.with(Pagination::has_next) on:click=move |_| pager.update(Pagination::next)>
                    "Next"
                </button>
            </nav>
        </section>
    }
}
