//! Admin user list.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use leptos::prelude::*;

use crate::app::AppSession;
use crate::components::banner_error::ErrorBanner;
use crate::components::data_table::{DataTable, TableCell, TableRow};
use crate::net::types::User;
use crate::state::remote::{RemoteData, load_into};

/// Columns: id, email, username, role.
pub(crate) fn user_rows(users: &[User]) -> Vec<TableRow> {
    users
        .iter()
        .map(|u| TableRow {
            key: u.id.to_string(),
            cells: vec![
                TableCell::Text(u.id.to_string()),
                TableCell::Text(u.email.clone()),
                TableCell::Text(u.username.clone()),
                TableCell::Text(u.role.as_str().to_owned()),
            ],
        })
        .collect()
}

#[component]
pub fn UsersPage(session: AppSession) -> impl IntoView {
    let api = session.api();
    let users = RwSignal::new(RemoteData::<Vec<User>>::default());

    let reload = Callback::new(move |()| {
        let api = api.clone();
        load_into(users, async move { api.list_users().await });
    });
    Effect::new(move || reload.run(()));

    let rows = Signal::derive(move || users.with(|u| user_rows(u.data.as_deref().unwrap_or_default())));
    let loading = Signal::derive(move || users.with(|u| u.loading));
    let error = Signal::derive(move || users.with(|u| u.error.clone()));

    view! {
        <section class="page users-page">
            <header class="page__header">
                <h1>"Users"</h1>
                <div class="page__actions">
                    <button class="btn" on:click=move |_| reload.run(()) disabled=move || loading.get()>
                        "Refresh"
                    </button>
                </div>
            </header>
            <ErrorBanner message=error/>
            <DataTable headers=vec!["ID", "Email", "Username", "Role"] rows=rows loading=loading/>
        </section>
    }
}
