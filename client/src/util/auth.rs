//! Route guard for pages that need a logged-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same decision: wait until the stored
//! token has been read, then render for a non-empty token or replace the
//! history entry with `/login`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::LOGIN_ROUTE;
use crate::state::session::SessionState;

/// Outcome of the guard for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Startup restore has not run yet.
    Pending,
    Render,
    Redirect(&'static str),
}

pub fn guard_decision(state: &SessionState) -> GuardDecision {
    if !state.restored {
        GuardDecision::Pending
    } else if state.is_authenticated() {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(LOGIN_ROUTE)
    }
}

/// Navigation options for guard redirects: the guarded URL is not kept in history.
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Redirect whenever the guard says so.
pub fn install_unauth_redirect<F>(auth: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardDecision::Redirect(path) = auth.with(guard_decision) {
            navigate(path, redirect_options());
        }
    });
}
