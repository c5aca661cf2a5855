//! Status pill for task and history rows.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use leptos::prelude::*;

/// Label and CSS modifier for one status value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeStyle {
    pub label: String,
    pub modifier: &'static str,
}

/// Known statuses get a friendly label; anything else is shown verbatim.
pub fn badge_style(status: &str) -> BadgeStyle {
    let (label, modifier) = match status.trim().to_ascii_uppercase().as_str() {
        "APPROVED" => ("Approved", "approved"),
        "PENDING" => ("Draft", "pending"),
        "REJECTED" => ("Rejected", "rejected"),
        "" => ("—", "neutral"),
        _ => (status, "neutral"),
    };
    BadgeStyle { label: label.to_owned(), modifier }
}

#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let style = badge_style(&status);
    let class = format!("status-badge status-badge--{}", style.modifier);

    view! { <span class=class title=status>{style.label}</span> }
}
