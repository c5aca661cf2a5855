use super::*;
use crate::net::types::{Role, User};
use crate::state::session::ProfileStatus;

fn user() -> User {
    User {
        id: 7,
        username: "mod".to_owned(),
        email: "mod@example.com".to_owned(),
        is_active: true,
        role: Role::Moderator,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn guard_waits_for_restore() {
    assert_eq!(guard_decision(&SessionState::default()), GuardDecision::Pending);
}

#[test]
fn guard_redirects_anonymous_to_login() {
    let state = SessionState { restored: true, ..SessionState::default() };
    assert_eq!(guard_decision(&state), GuardDecision::Redirect("/login"));
}

#[test]
fn guard_renders_with_token_even_before_profile_resolves() {
    let state = SessionState {
        token: "t".to_owned(),
        profile: ProfileStatus::Pending,
        restored: true,
        ..SessionState::default()
    };
    assert_eq!(guard_decision(&state), GuardDecision::Render);
}

#[test]
fn guard_renders_for_resolved_session() {
    let state = SessionState {
        token: "t".to_owned(),
        user: Some(user()),
        profile: ProfileStatus::Resolved,
        restored: true,
    };
    assert_eq!(guard_decision(&state), GuardDecision::Render);
}

#[test]
fn redirect_options_replace_history() {
    assert!(redirect_options().replace);
}
