//! Modal form for creating a task.
//!
//! DESIGN
//! ======
//! The dialog owns its draft and submits it itself so a failed create keeps
//! the form open with the server's message. The page only hears about
//! successful creates and reloads its list.

#[cfg(test)]
#[path = "create_task_dialog_test.rs"]
mod create_task_dialog_test;

use leptos::prelude::*;

use crate::components::banner_error::ErrorBanner;
use crate::net::api::ApiClient;
use crate::net::types::TaskCreate;

/// Form fields as typed, before validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub answer: String,
    pub difficulty: String,
    pub subject: String,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            answer: String::new(),
            difficulty: "1".to_owned(),
            subject: String::new(),
        }
    }
}

impl TaskDraft {
    /// Check the draft and build the create payload.
    ///
    /// # Errors
    ///
    /// Returns the message to show when the title is blank or the difficulty
    /// is not a whole number from 1 to 5.
    pub fn validate(&self) -> Result<TaskCreate, &'static str> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Enter a title.");
        }
        let difficulty = self
            .difficulty
            .trim()
            .parse::<i32>()
            .ok()
            .filter(|d| (1..=5).contains(d))
            .ok_or("Difficulty must be between 1 and 5.")?;
        Ok(TaskCreate {
            title: title.to_owned(),
            description: self.description.trim().to_owned(),
            answer: self.answer.trim().to_owned(),
            difficulty,
            subject: self.subject.trim().to_owned(),
        })
    }
}

/// "New task" button plus its modal.
#[component]
pub fn CreateTaskDialog(api: ApiClient, on_created: Callback<()>) -> impl IntoView {
    let open = RwSignal::new(false);
    let draft = RwSignal::new(TaskDraft::default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let close = move || {
        open.set(false);
        error.set(None);
    };

    let submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        let payload = match draft.with_untracked(TaskDraft::validate) {
            Ok(payload) => payload,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        error.set(None);
        busy.set(true);
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match api.create_task(&payload).await {
                Ok(()) => {
                    draft.set(TaskDraft::default());
                    open.set(false);
                    on_created.run(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            busy.set(false);
        });
    });

    view! {
        <button class="btn btn--primary" on:click=move |_| open.set(true)>"New task"</button>
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| close()>
                <div
                    class="dialog"
                    role="dialog"
                    aria-label="Create task"
                    on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
                >
                    <h2 class="dialog__title">"Create task"</h2>
                    <ErrorBanner message=error.into()/>
                    <form
                        class="dialog__form"
                        on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            submit.run(());
                        }
                    >
                        <label class="field">
                            <span>"Title"</span>
                            <input
                                type="text"
                                prop:value=move || draft.with(|d| d.title.clone())
                                on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                            />
                        </label>
                        <label class="field">
                            <span>"Description"</span>
                            <textarea
                                rows="4"
                                prop:value=move || draft.with(|d| d.description.clone())
                                on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                            ></textarea>
                        </label>
                        <label class="field">
                            <span>"Answer"</span>
                            <input
                                type="text"
                                prop:value=move || draft.with(|d| d.answer.clone())
                                on:input=move |ev| draft.update(|d| d.answer = event_target_value(&ev))
                            />
                        </label>
                        <div class="field-row">
                            <label class="field">
                                <span>"Difficulty"</span>
                                <input
                                    type="number"
                                    min="1"
                                    max="5"
                                    prop:value=move || draft.with(|d| d.difficulty.clone())
                                    on:input=move |ev| draft.update(|d| d.difficulty = event_target_value(&ev))
                                />
                            </label>
                            <label class="field">
                                <span>"Subject"</span>
                                <input
                                    type="text"
                                    prop:value=move || draft.with(|d| d.subject.clone())
                                    on:input=move |ev| draft.update(|d| d.subject = event_target_value(&ev))
                                />
                            </label>
                        </div>
                        <div class="dialog__actions">
                            <button type="button" class="btn" on:click=move |_| close()>"Cancel"</button>
                            <button type="submit" class="btn btn--primary" disabled=move || busy.get()>
                                {move || if busy.get() { "Creating..." } else { "Create" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
