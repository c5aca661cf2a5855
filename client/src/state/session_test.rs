use super::*;
use crate::net::types::Role;

fn alice() -> User {
    User {
        id: 1,
        username: "alice".to_owned(),
        email: "alice@example.com".to_owned(),
        is_active: true,
        role: Role::Teacher,
        created_at: None,
        updated_at: None,
    }
}

fn authenticated(token: &str) -> SessionState {
    let mut state = SessionState::default();
    state.apply(SessionEvent::TokenSaved { token: token.to_owned() });
    state.apply(SessionEvent::ProfileLoaded { token: token.to_owned(), user: alice() });
    state
}

// =============================================================
// Startup restore
// =============================================================

#[test]
fn default_state_is_anonymous_and_unrestored() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
    assert!(!state.restored);
    assert_eq!(state.profile, ProfileStatus::Absent);
}

#[test]
fn restore_with_token_goes_pending_and_fetches() {
    let mut state = SessionState::default();
    let effects = state.apply(SessionEvent::Restored { token: "t1".to_owned() });
    assert_eq!(effects, vec![SessionEffect::ConfigureClient("t1".to_owned()), SessionEffect::FetchProfile]);
    assert!(state.restored);
    assert!(state.is_authenticated());
    assert_eq!(state.profile, ProfileStatus::Pending);
}

#[test]
fn restore_without_token_stays_anonymous() {
    let mut state = SessionState::default();
    let effects = state.apply(SessionEvent::Restored { token: String::new() });
    assert_eq!(effects, vec![SessionEffect::ConfigureClient(String::new())]);
    assert!(state.restored);
    assert!(!state.is_authenticated());
}

// =============================================================
// Token changes
// =============================================================

#[test]
fn token_saved_persists_configures_and_fetches() {
    let mut state = SessionState::default();
    let effects = state.apply(SessionEvent::TokenSaved { token: "XYZ".to_owned() });
    assert_eq!(
        effects,
        vec![
            SessionEffect::Persist("XYZ".to_owned()),
            SessionEffect::ConfigureClient("XYZ".to_owned()),
            SessionEffect::FetchProfile,
        ]
    );
    assert_eq!(state.token, "XYZ");
    assert!(state.user.is_none());
}

#[test]
fn saving_empty_token_is_anonymous_without_fetch() {
    let mut state = authenticated("t1");
    let effects = state.apply(SessionEvent::TokenSaved { token: String::new() });
    assert_eq!(effects, vec![SessionEffect::Persist(String::new()), SessionEffect::ConfigureClient(String::new())]);
    assert!(!state.is_authenticated());
    assert!(state.user.is_none());
}

#[test]
fn new_token_drops_previous_profile() {
    let mut state = authenticated("t1");
    state.apply(SessionEvent::TokenSaved { token: "t2".to_owned() });
    assert!(state.user.is_none());
    assert_eq!(state.profile, ProfileStatus::Pending);
}

// =============================================================
// Profile resolution
// =============================================================

#[test]
fn profile_loaded_resolves_session() {
    let state = authenticated("t1");
    assert_eq!(state.token, "t1");
    assert_eq!(state.user, Some(alice()));
    assert_eq!(state.profile, ProfileStatus::Resolved);
    assert_eq!(state.role(), Some(Role::Teacher));
}

#[test]
fn stale_profile_is_ignored() {
    let mut state = SessionState::default();
    state.apply(SessionEvent::TokenSaved { token: "new".to_owned() });
    let effects = state.apply(SessionEvent::ProfileLoaded { token: "old".to_owned(), user: alice() });
    assert!(effects.is_empty());
    assert!(state.user.is_none());
    assert_eq!(state.profile, ProfileStatus::Pending);
}

#[test]
fn profile_after_logout_is_ignored() {
    let mut state = SessionState::default();
    state.apply(SessionEvent::TokenSaved { token: "t1".to_owned() });
    state.apply(SessionEvent::LoggedOut);
    state.apply(SessionEvent::ProfileLoaded { token: String::new(), user: alice() });
    assert!(state.user.is_none());
}

#[test]
fn unauthorized_profile_clears_token() {
    let mut state = SessionState::default();
    state.apply(SessionEvent::Restored { token: "expired".to_owned() });
    let effects = state.apply(SessionEvent::ProfileFailed { token: "expired".to_owned(), unauthorized: true });
    assert_eq!(effects, vec![SessionEffect::Persist(String::new()), SessionEffect::ConfigureClient(String::new())]);
    assert!(!state.is_authenticated());
    assert_eq!(state.profile, ProfileStatus::Absent);
}

#[test]
fn transient_profile_failure_keeps_token() {
    let mut state = SessionState::default();
    state.apply(SessionEvent::Restored { token: "t1".to_owned() });
    let effects = state.apply(SessionEvent::ProfileFailed { token: "t1".to_owned(), unauthorized: false });
    assert!(effects.is_empty());
    assert!(state.is_authenticated());
    assert!(state.user.is_none());
    assert_eq!(state.profile, ProfileStatus::Failed);
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_everything_and_redirects() {
    let mut state = authenticated("t1");
    let effects = state.apply(SessionEvent::LoggedOut);
    assert_eq!(
        effects,
        vec![
            SessionEffect::Persist(String::new()),
            SessionEffect::ConfigureClient(String::new()),
            SessionEffect::Redirect("/login"),
        ]
    );
    assert_eq!(state, SessionState { restored: true, ..SessionState::default() });
}
