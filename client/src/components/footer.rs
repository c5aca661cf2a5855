//! Bottom bar with a few fixed links.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;

use crate::components::header::NavLink;

/// Links shown in the footer regardless of session.
pub fn footer_links() -> [NavLink; 3] {
    [
        NavLink { href: "/", label: "Home" },
        NavLink { href: "/tasks", label: "Tasks" },
        NavLink { href: "/users", label: "Users" },
    ]
}

#[component]
pub fn Footer() -> impl IntoView {
    let links = footer_links()
        .into_iter()
        .map(|link| view! { <a class="app-footer__link" href=link.href>{link.label}</a> })
        .collect_view();

    view! { <footer class="app-footer">{links}</footer> }
}
