//! Inline error banner shown above page content.

use leptos::prelude::*;

/// Renders `message` when it is present and non-empty.
#[component]
pub fn ErrorBanner(message: Signal<Option<String>>) -> impl IntoView {
    let visible = move || message.with(|m| m.as_deref().is_some_and(|m| !m.is_empty()));

    view! {
        <Show when=visible>
            <div class="banner-error" role="alert">
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
