//! Session store: the authentication state of the running dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read synchronously by the route guard on every navigation decision and by
//! every flow that issues authenticated API calls. Mutated only by the auth
//! flows in `crate::auth::flow` when a collaborator reports a result.
//!
//! DESIGN
//! ======
//! `SessionStore` is an explicitly owned handle (cloning shares the same
//! state) instead of an ambient global, so each test injects a fresh one.
//! Change notification is an observer registration; the Leptos layer bridges
//! it into a signal for display only.
//!
//! `SessionState` keeps its fields private so the authentication invariant
//! holds by construction: a session is authenticated exactly when it carries
//! a non-empty access token. A USER role cannot be stored at all because the
//! store only accepts `SessionRole`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::observer::{Listeners, Subscription};
use super::persistence::{PersistedSession, SessionPersistence};
use crate::net::types::{Role, TokenPair};

/// Roles admitted into an admin session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SessionRole {
    /// Club leader; scoped to one club and subject to the terms gate.
    Leader,
    /// Union administrator; oversees every club, never terms-gated.
    Admin,
}

impl SessionRole {
    /// Map a wire role onto an admin role. `Role::User` has no admin session.
    pub fn from_role(role: Role) -> Option<Self> {
        match role {
            Role::User => None,
            Role::Leader => Some(Self::Leader),
            Role::Admin => Some(Self::Admin),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Leader => "Club leader",
            Self::Admin => "Union admin",
        }
    }
}

/// Where a session currently sits in the gating state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Unauthenticated,
    AuthenticatedPendingTerms,
    AuthenticatedActive,
}

/// Snapshot of the current authentication state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    access_token: Option<String>,
    refresh_token: Option<String>,
    role: Option<SessionRole>,
    club_uuid: Option<String>,
    agreed_terms: bool,
}

impl SessionState {
    /// Build an authenticated session. A blank access token yields the empty
    /// state, since a session without a bearer credential is not a session.
    pub fn authenticated(tokens: TokenPair, role: SessionRole, club_uuid: Option<String>, agreed_terms: bool) -> Self {
        let Some(access_token) = non_blank(tokens.access_token) else {
            return Self::default();
        };
        Self {
            access_token: Some(access_token),
            refresh_token: non_blank(tokens.refresh_token),
            role: Some(role),
            club_uuid: club_uuid.and_then(non_blank),
            agreed_terms,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    pub fn role(&self) -> Option<SessionRole> {
        self.role
    }

    pub fn club_uuid(&self) -> Option<&str> {
        self.club_uuid.as_deref()
    }

    pub fn agreed_terms(&self) -> bool {
        self.agreed_terms
    }

    pub fn phase(&self) -> SessionPhase {
        if !self.is_authenticated() {
            SessionPhase::Unauthenticated
        } else if self.role == Some(SessionRole::Leader) && !self.agreed_terms {
            SessionPhase::AuthenticatedPendingTerms
        } else {
            SessionPhase::AuthenticatedActive
        }
    }
}

fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() { None } else { Some(value) }
}

struct StoreInner {
    state: RefCell<SessionState>,
    listeners: Listeners<SessionState>,
}

/// Shared handle to the session state with change notification.
#[derive(Clone)]
pub struct SessionStore {
    inner: Rc<StoreInner>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::with_state(SessionState::default())
    }

    pub fn with_state(state: SessionState) -> Self {
        Self {
            inner: Rc::new(StoreInner { state: RefCell::new(state), listeners: Listeners::new() }),
        }
    }

    /// Restore the saved session before anything can read the store, then
    /// write every later change back to `backend`.
    pub fn persisted(backend: impl SessionPersistence + 'static) -> Self {
        let restored = backend.load().map(PersistedSession::into_state).unwrap_or_default();
        if restored.is_authenticated() {
            log::debug!("session restored from storage ({:?})", restored.phase());
        }
        let store = Self::with_state(restored);
        store
            .subscribe(move |state| {
                if state.is_authenticated() {
                    backend.save(&PersistedSession::from_state(state));
                } else {
                    backend.clear();
                }
            })
            .keep();
        store
    }

    /// Current state, read synchronously.
    pub fn snapshot(&self) -> SessionState {
        self.inner.state.borrow().clone()
    }

    /// Read the current state without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        f(&self.inner.state.borrow())
    }

    /// Replace every field in one step.
    pub fn set_auth(&self, tokens: TokenPair, role: SessionRole, club_uuid: Option<String>, agreed_terms: bool) {
        self.replace(SessionState::authenticated(tokens, role, club_uuid, agreed_terms));
    }

    /// Reset to the empty state. Clearing an empty store notifies nobody.
    pub fn clear_auth(&self) {
        self.replace(SessionState::default());
    }

    /// Record the server-confirmed terms agreement of a leader session.
    pub fn set_agreed_terms(&self) {
        let mut next = self.snapshot();
        if !next.is_authenticated() || next.role != Some(SessionRole::Leader) {
            log::debug!("ignoring terms agreement for non-leader session");
            return;
        }
        next.agreed_terms = true;
        self.replace(next);
    }

    /// Swap in a refreshed token pair, keeping role, club, and terms state.
    ///
    /// A response without a refresh token keeps the one already held.
    pub fn update_tokens(&self, mut tokens: TokenPair) {
        let current = self.snapshot();
        let Some(role) = current.role.filter(|_| current.is_authenticated()) else {
            log::debug!("ignoring token refresh for empty session");
            return;
        };
        if tokens.refresh_token.trim().is_empty() {
            if let Some(held) = current.refresh_token.clone() {
                tokens.refresh_token = held;
            }
        }
        self.replace(SessionState::authenticated(tokens, role, current.club_uuid, current.agreed_terms));
    }

    /// Register a listener for committed state changes.
    pub fn subscribe(&self, listener: impl Fn(&SessionState) + 'static) -> Subscription {
        self.inner.listeners.subscribe(listener)
    }

    fn replace(&self, next: SessionState) {
        {
            let mut state = self.inner.state.borrow_mut();
            if *state == next {
                return;
            }
            *state = next.clone();
        }
        self.inner.listeners.notify(&next);
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("phase", &self.with(SessionState::phase))
            .field("listeners", &self.inner.listeners.len())
            .finish()
    }
}
