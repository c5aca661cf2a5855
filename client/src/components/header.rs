//! Top bar with brand, role-based navigation and the account menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by the layout above every route. Navigation entries are
//! derived from the session signal, so they change as soon as the profile
//! resolves or the user logs out.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::app::AppSession;
use crate::net::types::{Role, User};
use crate::state::session::SessionState;

/// One entry in the top navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// Links visible for the given session.
pub fn nav_links(authenticated: bool, role: Option<Role>) -> Vec<NavLink> {
    if !authenticated {
        return Vec::new();
    }
    let mut links = vec![
        NavLink { href: "/tasks", label: "Tasks" },
        NavLink { href: "/task-history", label: "History" },
    ];
    if role.is_some_and(Role::can_moderate) {
        links.push(NavLink { href: "/moderation", label: "Moderation" });
    }
    if role.is_some_and(Role::can_manage_users) {
        links.push(NavLink { href: "/users", label: "Users" });
    }
    links
}

/// Avatar initials: first letters of up to two name segments.
pub fn initials(user: Option<&User>) -> String {
    let source = user
        .map(|u| if u.username.trim().is_empty() { u.email.as_str() } else { u.username.as_str() })
        .unwrap_or_default();
    let letters: String = source
        .split(|c: char| c.is_whitespace() || matches!(c, '.' | '@' | '_' | '-'))
        .filter(|segment| !segment.is_empty())
        .take(2)
        .filter_map(|segment| segment.chars().next())
        .flat_map(char::to_uppercase)
        .collect();
    if letters.is_empty() { "U".to_owned() } else { letters }
}

/// Name shown next to the avatar.
pub fn display_name(user: Option<&User>) -> String {
    match user {
        Some(u) if !u.email.is_empty() => u.email.clone(),
        Some(u) if !u.username.is_empty() => u.username.clone(),
        _ => "Profile".to_owned(),
    }
}

#[component]
pub fn Header(session: AppSession) -> impl IntoView {
    let auth = session.state;
    let manager = session.manager;

    let links = move || {
        auth.with(|s| nav_links(s.is_authenticated(), s.role()))
            .into_iter()
            .map(|link| view! { <a class="app-header__link" href=link.href>{link.label}</a> })
            .collect_view()
    };

    let on_logout = Callback::new(move |()| {
        let manager = manager.clone();
        leptos::task::spawn_local(async move {
            manager.logout().await;
        });
    });

    view! {
        <header class="app-header">
            <a class="app-header__brand" href="/">"Task Bank"</a>
            <nav class="app-header__nav">{links}</nav>
            <div class="app-header__account">
                <Show
                    when=move || auth.with(SessionState::is_authenticated)
                    fallback=|| view! { <a class="btn btn--small" href="/login">"Sign in"</a> }
                >
                    <a class="app-header__profile" href="/me" title="Profile">
                        <span class="app-header__avatar" aria-hidden="true">
                            {move || auth.with(|s| initials(s.user.as_ref()))}
                        </span>
                        <span class="app-header__name">{move || auth.with(|s| display_name(s.user.as_ref()))}</span>
                    </a>
                    <button class="btn btn--small" on:click=move |_| on_logout.run(())>"Log out"</button>
                </Show>
            </div>
        </header>
    }
}
