//! Task list with create, delete, and approve/reject toggling.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded route. Loads `/tasks` on mount and reloads after every
//! successful mutation; a failed mutation is shown in the banner and the
//! list is left as it was.

use std::future::Future;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::app::AppSession;
use crate::components::banner_error::ErrorBanner;
use crate::components::create_task_dialog::CreateTaskDialog;
use crate::components::task_card::TaskCard;
use crate::net::error::ApiError;
use crate::net::types::{Task, TaskStatus, TaskUpdate};
use crate::state::remote::{RemoteData, load_into};
use crate::util::dialog::confirm;

#[component]
pub fn TasksPage(session: AppSession) -> impl IntoView {
    let api = session.api();
    let tasks = RwSignal::new(RemoteData::<Vec<Task>>::default());
    let action_error = RwSignal::new(None::<String>);

    let reload = Callback::new({
        let api = api.clone();
        move |()| {
            let api = api.clone();
            load_into(tasks, async move { api.list_tasks().await });
        }
    });
    Effect::new(move || reload.run(()));

    let toggle = Callback::new({
        let api = api.clone();
        move |(id, next): (i64, TaskStatus)| {
            let api = api.clone();
            let patch = TaskUpdate { status: Some(next), ..TaskUpdate::default() };
            run_mutation(action_error, reload, async move { api.update_task(id, &patch).await });
        }
    });

    let remove = Callback::new({
        let api = api.clone();
        move |id: i64| {
            if !confirm("Delete this task?") {
                return;
            }
            let api = api.clone();
            run_mutation(action_error, reload, async move { api.delete_task(id).await });
        }
    });

    let message = Signal::derive(move || action_error.get().or_else(|| tasks.with(|t| t.error.clone())));

    let card_api = api.clone();
    let list = move || {
        let state = tasks.get();
        if state.loading && state.data.is_none() {
            return view! { <p class="page-status">"Loading..."</p> }.into_any();
        }
        let items = state.items();
        if items.is_empty() {
            return view! { <p class="page-status page-status--muted">"No tasks yet."</p> }.into_any();
        }
        let api = card_api.clone();
        items
            .into_iter()
            .map(|task| {
                let id = task.id;
                let next = task.status.toggled();
                view! {
                    <TaskCard
                        task=task
                        attempts=api.clone()
                        on_toggle=Callback::new(move |()| toggle.run((id, next)))
                        on_delete=Callback::new(move |()| remove.run(id))
                    />
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <section class="page tasks-page">
            <header class="page__header">
                <h1>"Tasks"</h1>
                <div class="page__actions">
                    <button class="btn" on:click=move |_| reload.run(()) disabled=move || tasks.with(|t| t.loading)>
                        "Refresh"
                    </button>
                    <CreateTaskDialog api=api on_created=reload/>
                </div>
            </header>
            <ErrorBanner message=message/>
            <div class="task-grid">{list}</div>
        </section>
    }
}

/// Run a mutation, then reload on success or surface the error.
fn run_mutation<Fut>(error: RwSignal<Option<String>>, reload: Callback<()>, call: Fut)
where
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    error.set(None);
    leptos::task::spawn_local(async move {
        match call.await {
            Ok(()) => reload.run(()),
            Err(e) => error.set(Some(e.to_string())),
        }
    });
}
