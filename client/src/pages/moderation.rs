//! Moderation queue: approve or reject submitted tasks.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::app::AppSession;
use crate::components::banner_error::ErrorBanner;
use crate::components::task_card::TaskCard;
use crate::net::types::Task;
use crate::state::remote::{RemoteData, load_into};

#[component]
pub fn ModerationPage(session: AppSession) -> impl IntoView {
    let api = session.api();
    let queue = RwSignal::new(RemoteData::<Vec<Task>>::default());
    let action_error = RwSignal::new(None::<String>);

    let reload = Callback::new({
        let api = api.clone();
        move |()| {
            let api = api.clone();
            load_into(queue, async move { api.moderation_queue().await });
        }
    });
    Effect::new(move || reload.run(()));

    let decide = Callback::new(move |(id, approve): (i64, bool)| {
        let api = api.clone();
        action_error.set(None);
        leptos::task::spawn_local(async move {
            match api.moderate(id, approve).await {
                Ok(()) => reload.run(()),
                Err(e) => action_error.set(Some(e.to_string())),
            }
        });
    });

    let message = Signal::derive(move || action_error.get().or_else(|| queue.with(|q| q.error.clone())));

    let list = move || {
        let state = queue.get();
        if state.loading && state.data.is_none() {
            return view! { <p class="page-status">"Loading..."</p> }.into_any();
        }
        let items = state.items();
        if items.is_empty() {
            return view! { <p class="page-status page-status--muted">"The queue is empty."</p> }.into_any();
        }
        items
            .into_iter()
            .map(|task| {
                let id = task.id;
                view! {
                    <TaskCard
                        task=task
                        on_approve=Callback::new(move |()| decide.run((id, true)))
                        on_reject=Callback::new(move |()| decide.run((id, false)))
                    />
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <section class="page moderation-page">
            <header class="page__header">
                <h1>"Moderation"</h1>
                <div class="page__actions">
                    <button class="btn" on:click=move |_| reload.run(()) disabled=move || queue.with(|q| q.loading)>
                        "Refresh"
                    </button>
                </div>
            </header>
            <ErrorBanner message=message/>
            <div class="task-grid">{list}</div>
        </section>
    }
}
