//! Destination paths and role-based landing.

#[cfg(test)]
#[path = "paths_test.rs"]
mod paths_test;

use crate::state::session::{SessionPhase, SessionRole, SessionState};

pub const LOGIN: &str = "/login";
pub const TERMS: &str = "/terms";
pub const HOME: &str = "/";
pub const CLUB_DASHBOARD: &str = "/club/dashboard";
pub const UNION_CLUBS: &str = "/admin/clubs";

/// Strip a trailing slash so `/terms/` and `/terms` compare equal.
pub fn normalize(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { HOME } else { trimmed }
}

pub fn is_destination(path: &str, destination: &str) -> bool {
    normalize(path) == normalize(destination)
}

/// Screen a freshly signed-in user lands on.
pub fn landing_path(role: SessionRole, agreed_terms: bool) -> &'static str {
    match role {
        SessionRole::Admin => UNION_CLUBS,
        SessionRole::Leader if agreed_terms => CLUB_DASHBOARD,
        SessionRole::Leader => TERMS,
    }
}

/// Landing screen for whatever session is current.
pub fn landing_for(state: &SessionState) -> &'static str {
    match (state.phase(), state.role()) {
        (SessionPhase::Unauthenticated, _) | (_, None) => LOGIN,
        (_, Some(role)) => landing_path(role, state.agreed_terms()),
    }
}
