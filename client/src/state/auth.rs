//! Session manager: the runtime owner of the session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Created once in `App` and passed explicitly to the layout, the route
//! guard and every page. It drives `SessionState` through discrete events,
//! runs the resulting effects against the token store and the request
//! client, and notifies subscribers (the reactive UI signal) after each
//! transition.
//!
//! ERROR HANDLING
//! ==============
//! Profile lookups never fail outward: a rejected token ends the session and
//! any other failure leaves the session without a profile. Login and
//! register errors are returned to the calling page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{Credentials, Registration};
use crate::state::session::{SessionEffect, SessionEvent, SessionState};
use crate::state::token_store::{BrowserTokenStore, TokenStore};

/// What subscribers receive after every transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionUpdate {
    pub state: SessionState,
    /// Route the view layer should navigate to, if any.
    pub redirect: Option<&'static str>,
}

type Listener = Arc<dyn Fn(&SessionUpdate) + Send + Sync>;

/// Shared handle; clones drive the same session.
#[derive(Clone)]
pub struct SessionManager {
    api: ApiClient,
    store: Arc<dyn TokenStore>,
    state: Arc<RwLock<SessionState>>,
    listeners: Arc<RwLock<Vec<Listener>>>,
}

impl fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionManager")
            .field("api", &self.api)
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl SessionManager {
    pub fn new(api: ApiClient, store: Arc<dyn TokenStore>) -> Self {
        Self {
            api,
            store,
            state: Arc::new(RwLock::new(SessionState::default())),
            listeners: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Manager wired to `localStorage` and `fetch`.
    pub fn browser() -> Self {
        Self::new(ApiClient::browser(), Arc::new(BrowserTokenStore::default()))
    }

    /// Request client carrying this session's token.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> SessionState {
        self.state.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().unwrap_or_else(PoisonError::into_inner).is_authenticated()
    }

    /// Register a listener called after every transition.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&SessionUpdate) + Send + Sync + 'static,
    {
        self.listeners.write().unwrap_or_else(PoisonError::into_inner).push(Arc::new(listener));
    }

    /// Restore the persisted token and resolve its profile.
    pub async fn start(&self) {
        let token = self.store.get();
        if self.dispatch(SessionEvent::Restored { token }) {
            self.refresh_profile().await;
        }
    }

    /// Adopt `token` (empty logs out without redirecting) and resolve its profile.
    pub async fn save_token(&self, token: &str) {
        if self.dispatch(SessionEvent::TokenSaved { token: token.to_owned() }) {
            self.refresh_profile().await;
        }
    }

    /// Exchange credentials for a token and adopt it.
    ///
    /// # Errors
    ///
    /// Returns the login request's error; the session is left unchanged.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), ApiError> {
        let token = self.api.login(credentials).await?;
        self.save_token(&token).await;
        Ok(())
    }

    /// Create an account. The session is not changed.
    ///
    /// # Errors
    ///
    /// Returns the register request's error.
    pub async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        self.api.register(registration).await
    }

    /// End the session. The state is Anonymous before this first awaits;
    /// the server-side logout that follows is best effort.
    pub async fn logout(&self) {
        let token = self.state().token;
        self.dispatch(SessionEvent::LoggedOut);
        if token.is_empty() {
            return;
        }
        if let Err(e) = self.api.logout(&token).await {
            leptos::logging::warn!("server logout failed: {e}");
        }
    }

    /// Fetch the profile for the current token.
    pub async fn refresh_profile(&self) {
        let token = self.state().token;
        if token.is_empty() {
            return;
        }
        let event = match self.api.me().await {
            Ok(user) => SessionEvent::ProfileLoaded { token, user },
            Err(e) => {
                leptos::logging::warn!("profile lookup failed: {e}");
                SessionEvent::ProfileFailed { token, unauthorized: e.is_unauthorized() }
            }
        };
        self.dispatch(event);
    }

    /// Apply `event`, run its effects, notify listeners.
    /// Returns whether a profile fetch was requested.
    fn dispatch(&self, event: SessionEvent) -> bool {
        let (effects, snapshot) = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            let effects = state.apply(event);
            (effects, state.clone())
        };

        let mut fetch = false;
        let mut redirect = None;
        for effect in effects {
            match effect {
                SessionEffect::Persist(token) => self.store.set(&token),
                SessionEffect::ConfigureClient(token) => self.api.set_token(&token),
                SessionEffect::FetchProfile => fetch = true,
                SessionEffect::Redirect(route) => redirect = Some(route),
            }
        }

        let listeners = self.listeners.read().unwrap_or_else(PoisonError::into_inner).clone();
        let update = SessionUpdate { state: snapshot, redirect };
        for listener in &listeners {
            listener(&update);
        }
        fetch
    }
}
