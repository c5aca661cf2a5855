//! Session state machine.
//!
//! DESIGN
//! ======
//! Every change to the session goes through `SessionState::apply`, which
//! maps one discrete event to the next state plus the side effects the
//! manager must run (persist the token, reconfigure the client, fetch the
//! profile, redirect). Nothing here touches storage or the network.
//!
//! | event            | token      | profile           | effects                                   |
//! |------------------|------------|-------------------|-------------------------------------------|
//! | `Restored(t)`    | t          | Pending / Absent  | configure client, fetch if t non-empty    |
//! | `TokenSaved(t)`  | t          | Pending / Absent  | persist, configure, fetch if t non-empty  |
//! | `ProfileLoaded`  | unchanged  | Resolved          | none                                      |
//! | `ProfileFailed`  | cleared on 401 | Absent / Failed | persist + configure on 401              |
//! | `LoggedOut`      | cleared    | Absent            | persist, configure, redirect to login     |
//!
//! Profile events carry the token they were fetched for and are ignored when
//! that token is no longer current.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::LOGIN_ROUTE;
use crate::net::types::{Role, User};

/// Where the profile lookup for the current token stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProfileStatus {
    /// No token, so nothing to look up.
    #[default]
    Absent,
    Pending,
    Resolved,
    /// Lookup failed for a reason other than a rejected token.
    Failed,
}

/// Client-side record of who is logged in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: String,
    pub user: Option<User>,
    pub profile: ProfileStatus,
    /// False until the persisted token has been read at startup.
    pub restored: bool,
}

/// Inputs to the state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    Restored { token: String },
    TokenSaved { token: String },
    ProfileLoaded { token: String, user: User },
    ProfileFailed { token: String, unauthorized: bool },
    LoggedOut,
}

/// Side effects requested by a transition, in execution order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEffect {
    /// Write the token to persistent storage (empty deletes).
    Persist(String),
    /// Set the token the request client sends.
    ConfigureClient(String),
    FetchProfile,
    Redirect(&'static str),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }

    /// Apply `event` and return the effects to run.
    pub fn apply(&mut self, event: SessionEvent) -> Vec<SessionEffect> {
        match event {
            SessionEvent::Restored { token } => {
                self.restored = true;
                let fetch = self.replace_token(&token);
                let mut effects = vec![SessionEffect::ConfigureClient(token)];
                if fetch {
                    effects.push(SessionEffect::FetchProfile);
                }
                effects
            }
            SessionEvent::TokenSaved { token } => {
                self.restored = true;
                let fetch = self.replace_token(&token);
                let mut effects = vec![SessionEffect::Persist(token.clone()), SessionEffect::ConfigureClient(token)];
                if fetch {
                    effects.push(SessionEffect::FetchProfile);
                }
                effects
            }
            SessionEvent::ProfileLoaded { token, user } => {
                if token == self.token && self.is_authenticated() {
                    self.user = Some(user);
                    self.profile = ProfileStatus::Resolved;
                }
                Vec::new()
            }
            SessionEvent::ProfileFailed { token, unauthorized } => {
                if token != self.token || !self.is_authenticated() {
                    return Vec::new();
                }
                self.user = None;
                if unauthorized {
                    self.token.clear();
                    self.profile = ProfileStatus::Absent;
                    vec![SessionEffect::Persist(String::new()), SessionEffect::ConfigureClient(String::new())]
                } else {
                    self.profile = ProfileStatus::Failed;
                    Vec::new()
                }
            }
            SessionEvent::LoggedOut => {
                self.restored = true;
                self.replace_token("");
                vec![
                    SessionEffect::Persist(String::new()),
                    SessionEffect::ConfigureClient(String::new()),
                    SessionEffect::Redirect(LOGIN_ROUTE),
                ]
            }
        }
    }

    /// Swap in a new token and reset the profile. Returns whether a fetch is due.
    fn replace_token(&mut self, token: &str) -> bool {
        token.clone_into(&mut self.token);
        self.user = None;
        if token.is_empty() {
            self.profile = ProfileStatus::Absent;
            false
        } else {
            self.profile = ProfileStatus::Pending;
            true
        }
    }
}
