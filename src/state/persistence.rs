//! Session persistence across page reloads.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: a missing or unreadable entry restores as an
//! empty session, which the guard turns into a login redirect. Restored
//! values go back through `SessionState::authenticated`, so a tampered entry
//! cannot produce a session that breaks the store's invariants.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use super::session::{SessionRole, SessionState};
use crate::net::types::TokenPair;
use crate::util::storage;

/// Storage-facing shape of an authenticated session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    pub role: SessionRole,
    #[serde(rename = "clubUUID", default)]
    pub club_uuid: Option<String>,
    #[serde(default)]
    pub is_agreed_terms: bool,
}

impl PersistedSession {
    /// Capture an authenticated state; returns an empty-token record otherwise.
    pub fn from_state(state: &SessionState) -> Self {
        Self {
            access_token: state.access_token().unwrap_or_default().to_owned(),
            refresh_token: state.refresh_token().unwrap_or_default().to_owned(),
            role: state.role().unwrap_or(SessionRole::Leader),
            club_uuid: state.club_uuid().map(str::to_owned),
            is_agreed_terms: state.agreed_terms(),
        }
    }

    pub fn into_state(self) -> SessionState {
        SessionState::authenticated(
            TokenPair { access_token: self.access_token, refresh_token: self.refresh_token },
            self.role,
            self.club_uuid,
            self.is_agreed_terms,
        )
    }
}

/// Where the session store keeps its state between reloads.
pub trait SessionPersistence {
    fn load(&self) -> Option<PersistedSession>;
    fn save(&self, session: &PersistedSession);
    fn clear(&self);
}

/// `localStorage`-backed persistence under a single key.
#[derive(Clone, Debug)]
pub struct BrowserPersistence {
    key: String,
}

impl BrowserPersistence {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl SessionPersistence for BrowserPersistence {
    fn load(&self) -> Option<PersistedSession> {
        storage::load_json(&self.key)
    }

    fn save(&self, session: &PersistedSession) {
        storage::save_json(&self.key, session);
    }

    fn clear(&self) {
        storage::remove(&self.key);
    }
}

/// In-memory persistence; clones share the same slot.
#[derive(Clone, Debug, Default)]
pub struct MemoryPersistence {
    slot: Rc<RefCell<Option<PersistedSession>>>,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_saved(session: PersistedSession) -> Self {
        Self { slot: Rc::new(RefCell::new(Some(session))) }
    }

    pub fn saved(&self) -> Option<PersistedSession> {
        self.slot.borrow().clone()
    }
}

impl SessionPersistence for MemoryPersistence {
    fn load(&self) -> Option<PersistedSession> {
        self.saved()
    }

    fn save(&self, session: &PersistedSession) {
        *self.slot.borrow_mut() = Some(session.clone());
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}
