use super::*;
use crate::state::persistence::MemoryPersistence;
use std::cell::Cell;

// =============================================================
// Helpers
// =============================================================

fn tokens(access: &str) -> TokenPair {
    TokenPair { access_token: access.to_owned(), refresh_token: format!("{access}-refresh") }
}

fn leader_store(agreed: bool) -> SessionStore {
    let store = SessionStore::new();
    store.set_auth(tokens("acc"), SessionRole::Leader, Some("club-1".to_owned()), agreed);
    store
}

fn change_counter(store: &SessionStore) -> (Rc<Cell<usize>>, Subscription) {
    let count = Rc::new(Cell::new(0));
    let counter = Rc::clone(&count);
    let sub = store.subscribe(move |_| counter.set(counter.get() + 1));
    (count, sub)
}

// =============================================================
// SessionState invariants
// =============================================================

#[test]
fn default_state_is_unauthenticated() {
    let state = SessionState::default();
    assert!(!state.is_authenticated());
    assert_eq!(state.access_token(), None);
    assert_eq!(state.role(), None);
    assert!(!state.agreed_terms());
    assert_eq!(state.phase(), SessionPhase::Unauthenticated);
}

#[test]
fn authenticated_iff_access_token_non_empty() {
    let cases = [("acc", true), ("", false), ("   ", false)];
    for (access, expected) in cases {
        let state = SessionState::authenticated(tokens(access), SessionRole::Admin, None, false);
        assert_eq!(state.is_authenticated(), expected, "access token {access:?}");
        assert_eq!(state.access_token().is_some_and(|t| !t.is_empty()), expected);
    }
}

#[test]
fn blank_access_token_yields_empty_state() {
    let state = SessionState::authenticated(tokens(""), SessionRole::Leader, Some("club-1".to_owned()), true);
    assert_eq!(state, SessionState::default());
}

#[test]
fn blank_club_uuid_is_absent() {
    let state = SessionState::authenticated(tokens("acc"), SessionRole::Leader, Some(String::new()), false);
    assert_eq!(state.club_uuid(), None);
}

#[test]
fn session_role_excludes_user() {
    assert_eq!(SessionRole::from_role(Role::User), None);
    assert_eq!(SessionRole::from_role(Role::Leader), Some(SessionRole::Leader));
    assert_eq!(SessionRole::from_role(Role::Admin), Some(SessionRole::Admin));
}

// =============================================================
// Phases
// =============================================================

#[test]
fn leader_without_terms_is_pending() {
    assert_eq!(leader_store(false).snapshot().phase(), SessionPhase::AuthenticatedPendingTerms);
}

#[test]
fn leader_with_terms_is_active() {
    assert_eq!(leader_store(true).snapshot().phase(), SessionPhase::AuthenticatedActive);
}

#[test]
fn admin_is_active_regardless_of_terms() {
    let store = SessionStore::new();
    store.set_auth(tokens("acc"), SessionRole::Admin, None, false);
    assert_eq!(store.snapshot().phase(), SessionPhase::AuthenticatedActive);
}

// =============================================================
// Mutations
// =============================================================

#[test]
fn set_auth_replaces_every_field() {
    let store = leader_store(true);
    store.set_auth(tokens("other"), SessionRole::Admin, None, false);

    let state = store.snapshot();
    assert_eq!(state.access_token(), Some("other"));
    assert_eq!(state.refresh_token(), Some("other-refresh"));
    assert_eq!(state.role(), Some(SessionRole::Admin));
    assert_eq!(state.club_uuid(), None);
    assert!(!state.agreed_terms());
}

#[test]
fn clear_auth_is_idempotent() {
    let once = leader_store(true);
    once.clear_auth();
    let twice = leader_store(true);
    twice.clear_auth();
    twice.clear_auth();

    assert_eq!(once.snapshot(), SessionState::default());
    assert_eq!(twice.snapshot(), once.snapshot());
}

#[test]
fn set_agreed_terms_only_touches_terms_flag() {
    let store = leader_store(false);
    let before = store.snapshot();
    store.set_agreed_terms();
    let after = store.snapshot();

    assert!(after.agreed_terms());
    assert_eq!(after.access_token(), before.access_token());
    assert_eq!(after.role(), before.role());
    assert_eq!(after.club_uuid(), before.club_uuid());
    assert_eq!(after.phase(), SessionPhase::AuthenticatedActive);
}

#[test]
fn set_agreed_terms_is_noop_for_admin_and_empty_sessions() {
    let admin = SessionStore::new();
    admin.set_auth(tokens("acc"), SessionRole::Admin, None, false);
    admin.set_agreed_terms();
    assert!(!admin.snapshot().agreed_terms());

    let empty = SessionStore::new();
    empty.set_agreed_terms();
    assert_eq!(empty.snapshot(), SessionState::default());
}

#[test]
fn update_tokens_keeps_role_club_and_terms() {
    let store = leader_store(true);
    store.update_tokens(tokens("fresh"));

    let state = store.snapshot();
    assert_eq!(state.access_token(), Some("fresh"));
    assert_eq!(state.refresh_token(), Some("fresh-refresh"));
    assert_eq!(state.role(), Some(SessionRole::Leader));
    assert_eq!(state.club_uuid(), Some("club-1"));
    assert!(state.agreed_terms());
}

#[test]
fn update_tokens_without_refresh_token_keeps_the_held_one() {
    let store = SessionStore::new();
    let initial = TokenPair { access_token: "a1".to_owned(), refresh_token: "r1".to_owned() };
    store.set_auth(initial, SessionRole::Admin, None, false);

    let refreshed: TokenPair = serde_json::from_str(r#"{"accessToken":"a2"}"#).unwrap();
    store.update_tokens(refreshed);

    let state = store.snapshot();
    assert_eq!(state.access_token(), Some("a2"));
    assert_eq!(state.refresh_token(), Some("r1"));
}

#[test]
fn update_tokens_ignores_empty_session() {
    let store = SessionStore::new();
    store.update_tokens(tokens("fresh"));
    assert!(!store.snapshot().is_authenticated());
}

// =============================================================
// Notifications
// =============================================================

#[test]
fn listeners_see_committed_state() {
    let store = SessionStore::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_in = Rc::clone(&seen);
    let reader = store.clone();
    let _sub = store.subscribe(move |state| {
        assert_eq!(&reader.snapshot(), state);
        seen_in.borrow_mut().push(state.phase());
    });

    store.set_auth(tokens("acc"), SessionRole::Leader, None, false);
    store.set_agreed_terms();
    store.clear_auth();

    assert_eq!(
        *seen.borrow(),
        vec![
            SessionPhase::AuthenticatedPendingTerms,
            SessionPhase::AuthenticatedActive,
            SessionPhase::Unauthenticated,
        ]
    );
}

#[test]
fn unchanged_state_does_not_notify() {
    let store = SessionStore::new();
    let (count, _sub) = change_counter(&store);

    store.clear_auth();
    store.clear_auth();
    store.set_agreed_terms();
    assert_eq!(count.get(), 0);
}

#[test]
fn listener_may_mutate_store_reentrantly() {
    let store = SessionStore::new();
    let inner = store.clone();
    let _sub = store.subscribe(move |state| {
        if state.phase() == SessionPhase::AuthenticatedPendingTerms {
            inner.set_agreed_terms();
        }
    });

    store.set_auth(tokens("acc"), SessionRole::Leader, None, false);
    assert_eq!(store.snapshot().phase(), SessionPhase::AuthenticatedActive);
}

// =============================================================
// Persistence
// =============================================================

#[test]
fn persisted_store_restores_before_first_read() {
    let backend = MemoryPersistence::new();
    {
        let first = SessionStore::persisted(backend.clone());
        first.set_auth(tokens("acc"), SessionRole::Leader, Some("club-1".to_owned()), true);
    }

    let reloaded = SessionStore::persisted(backend);
    let state = reloaded.snapshot();
    assert_eq!(state.access_token(), Some("acc"));
    assert_eq!(state.club_uuid(), Some("club-1"));
    assert_eq!(state.phase(), SessionPhase::AuthenticatedActive);
}

#[test]
fn persisted_store_forgets_on_clear() {
    let backend = MemoryPersistence::new();
    let store = SessionStore::persisted(backend.clone());
    store.set_auth(tokens("acc"), SessionRole::Admin, None, false);
    assert!(backend.saved().is_some());

    store.clear_auth();
    assert_eq!(backend.saved(), None);
}

#[test]
fn persisted_store_saves_terms_agreement() {
    let backend = MemoryPersistence::new();
    let store = SessionStore::persisted(backend.clone());
    store.set_auth(tokens("acc"), SessionRole::Leader, None, false);
    store.set_agreed_terms();

    assert!(backend.saved().is_some_and(|s| s.is_agreed_terms));
}
