//! Root application component with routing and the session handle.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one `SessionManager`, mirrors its state into a reactive
//! signal and hands the resulting `AppSession` to the layout, the guard and
//! every page as a prop. The stored token is restored once the app is
//! running in the browser.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::NavigateOptions;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::hooks::use_navigate;
use leptos_router::StaticSegment;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::protected::Protected;
use crate::net::api::ApiClient;
use crate::pages::{
    home::HomePage, login::LoginPage, me::MePage, moderation::ModerationPage, register::RegisterPage,
    task_history::TaskHistoryPage, tasks::TasksPage, users::UsersPage,
};
use crate::state::auth::SessionManager;
use crate::state::session::SessionState;
use crate::util::auth::redirect_options;

/// Session handle shared by the view layer.
#[derive(Clone)]
pub struct AppSession {
    pub manager: SessionManager,
    pub state: RwSignal<SessionState>,
    /// Redirect requested by the last transition, consumed by the layout.
    pub redirect: RwSignal<Option<&'static str>>,
}

impl AppSession {
    pub fn new(manager: SessionManager) -> Self {
        let state = RwSignal::new(manager.state());
        let redirect = RwSignal::new(None);
        manager.subscribe(move |update| {
            state.set(update.state.clone());
            if let Some(route) = update.redirect {
                redirect.set(Some(route));
            }
        });
        Self { manager, state, redirect }
    }

    /// Request client carrying the current token.
    pub fn api(&self) -> ApiClient {
        self.manager.api().clone()
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = AppSession::new(SessionManager::browser());

    // Effects only run in the browser, so the token is never read during SSR.
    let manager = session.manager.clone();
    Effect::new(move || {
        let manager = manager.clone();
        leptos::task::spawn_local(async move {
            manager.start().await;
        });
    });

    let layout_session = session.clone();

    view! {
        <Stylesheet id="leptos" href="/pkg/taskbank.css"/>
        <Title text="Task Bank"/>

        <Router>
            <Layout session=layout_session>
                <Routes fallback=|| view! { <Redirect path="/"/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route
                        path=StaticSegment("login")
                        view={
                            let session = session.clone();
                            move || view! { <LoginPage session=session.clone()/> }
                        }
                    />
                    <Route
                        path=StaticSegment("register")
                        view={
                            let session = session.clone();
                            move || view! { <RegisterPage session=session.clone()/> }
                        }
                    />
                    <Route
                        path=StaticSegment("tasks")
                        view={
                            let session = session.clone();
                            move || {
                                let page = session.clone();
                                view! {
                                    <Protected session=session.clone()>
                                        <TasksPage session=page.clone()/>
                                    </Protected>
                                }
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("task-history")
                        view={
                            let session = session.clone();
                            move || {
                                let page = session.clone();
                                view! {
                                    <Protected session=session.clone()>
                                        <TaskHistoryPage session=page.clone()/>
                                    </Protected>
                                }
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("moderation")
                        view={
                            let session = session.clone();
                            move || {
                                let page = session.clone();
                                view! {
                                    <Protected session=session.clone()>
                                        <ModerationPage session=page.clone()/>
                                    </Protected>
                                }
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("users")
                        view={
                            let session = session.clone();
                            move || {
                                let page = session.clone();
                                view! {
                                    <Protected session=session.clone()>
                                        <UsersPage session=page.clone()/>
                                    </Protected>
                                }
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("me")
                        view={
                            let session = session.clone();
                            move || {
                                let page = session.clone();
                                view! {
                                    <Protected session=session.clone()>
                                        <MePage session=page.clone()/>
                                    </Protected>
                                }
                            }
                        }
                    />
                </Routes>
            </Layout>
        </Router>
    }
}

/// Header, routed content and footer. Follows redirects requested by the
/// session, replacing the current entry like the route guard does.
#[component]
fn Layout(session: AppSession, children: Children) -> impl IntoView {
    let redirect = session.redirect;
    let navigate = use_navigate();
    Effect::new(move || {
        if let Some((route, options)) = take_redirect(redirect) {
            navigate(route, options);
        }
    });

    view! {
        <div class="app-shell">
            <Header session=session/>
            <main class="app-main">{children()}</main>
            <Footer/>
        </div>
    }
}

/// Consume the pending session redirect along with the options to follow it with.
fn take_redirect(redirect: RwSignal<Option<&'static str>>) -> Option<(&'static str, NavigateOptions)> {
    let route = redirect.get()?;
    redirect.set(None);
    Some((route, redirect_options()))
}
