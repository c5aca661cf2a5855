//! Guard wrapper for routes that need a logged-in user.

#[cfg(test)]
#[path = "protected_test.rs"]
mod protected_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::AppSession;
use crate::state::session::SessionState;
use crate::util::auth::{GuardDecision, guard_decision, install_unauth_redirect};

/// Whether guarded children are built for `state`. Nothing they load can
/// start while this is false.
pub fn mounts_children(state: &SessionState) -> bool {
    guard_decision(state) == GuardDecision::Render
}

/// Renders `children` only for an authenticated session. Children are not
/// mounted at all otherwise, so their data loads never start.
#[component]
pub fn Protected(session: AppSession, children: ChildrenFn) -> impl IntoView {
    let auth = session.state;
    install_unauth_redirect(auth, use_navigate());

    let decision = move || auth.with(guard_decision);
    let placeholder = move || {
        let text = match decision() {
            GuardDecision::Pending => "Loading...",
            GuardDecision::Redirect(_) | GuardDecision::Render => "Redirecting to login...",
        };
        view! { <p class="page-status">{text}</p> }
    };

    view! {
        <Show when=move || auth.with(mounts_children) fallback=placeholder>
            {children()}
        </Show>
    }
}
