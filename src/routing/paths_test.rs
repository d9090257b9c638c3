use super::*;
use crate::net::types::TokenPair;

fn session(role: SessionRole, agreed: bool) -> SessionState {
    let tokens = TokenPair { access_token: "acc".to_owned(), refresh_token: "ref".to_owned() };
    SessionState::authenticated(tokens, role, None, agreed)
}

#[test]
fn normalize_strips_trailing_slash() {
    assert_eq!(normalize("/terms/"), "/terms");
    assert_eq!(normalize("/club/dashboard"), "/club/dashboard");
    assert_eq!(normalize("/"), "/");
    assert_eq!(normalize(""), "/");
}

#[test]
fn is_destination_ignores_trailing_slash() {
    assert!(is_destination("/terms/", TERMS));
    assert!(!is_destination("/terms/extra", TERMS));
    assert!(!is_destination("/club/dashboard", TERMS));
}

#[test]
fn landing_path_by_role() {
    assert_eq!(landing_path(SessionRole::Admin, false), UNION_CLUBS);
    assert_eq!(landing_path(SessionRole::Admin, true), UNION_CLUBS);
    assert_eq!(landing_path(SessionRole::Leader, true), CLUB_DASHBOARD);
    assert_eq!(landing_path(SessionRole::Leader, false), TERMS);
}

#[test]
fn landing_for_empty_session_is_login() {
    assert_eq!(landing_for(&SessionState::default()), LOGIN);
}

#[test]
fn landing_for_follows_session_role() {
    assert_eq!(landing_for(&session(SessionRole::Leader, false)), TERMS);
    assert_eq!(landing_for(&session(SessionRole::Leader, true)), CLUB_DASHBOARD);
    assert_eq!(landing_for(&session(SessionRole::Admin, false)), UNION_CLUBS);
}
