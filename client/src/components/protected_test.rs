use std::sync::Arc;

use super::*;
use crate::net::api::ApiClient;
use crate::net::test_support::{ALICE_JSON, MockTransport, json};
use crate::state::auth::SessionManager;
use crate::state::token_store::MemoryTokenStore;

#[test]
fn children_wait_for_restore() {
    assert!(!mounts_children(&SessionState::default()));
}

#[test]
fn children_not_mounted_for_anonymous_session() {
    let state = SessionState { restored: true, ..SessionState::default() };
    assert!(!mounts_children(&state));
}

#[tokio::test]
async fn anonymous_start_fetches_nothing_and_keeps_children_unmounted() {
    let transport = MockTransport::new(Vec::new());
    let session = SessionManager::new(
        ApiClient::new("http://api.test", transport.clone()),
        Arc::new(MemoryTokenStore::default()),
    );

    session.start().await;

    let state = session.state();
    assert!(!mounts_children(&state));
    assert_eq!(guard_decision(&state), GuardDecision::Redirect("/login"));
    assert!(transport.sent().is_empty());
}

#[tokio::test]
async fn restored_token_mounts_children() {
    let transport = MockTransport::new(vec![json(200, ALICE_JSON)]);
    let session = SessionManager::new(
        ApiClient::new("http://api.test", transport),
        Arc::new(MemoryTokenStore::with_token("t1")),
    );

    session.start().await;

    assert!(mounts_children(&session.state()));
}
