//! Route guard for protected destinations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every screen except login sits behind this guard. It is re-run whenever
//! the session changes or the current path changes, and decides between
//! rendering the screen, sending the user to login, or sending a leader to
//! the terms screen.
//!
//! DESIGN
//! ======
//! `decide` is a pure function of the session snapshot and the path.
//! `RedirectExecutor` is the only place that navigates, always with history
//! replace so the blocked screen cannot be reached with Back. `RouteGuard`
//! connects the two to a `SessionStore` and a `Navigator` and reports each
//! decision to the rendering host, which shows the guarded content only on
//! `Permit`.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::paths::{self, LOGIN, TERMS};
use crate::state::observer::{Listeners, Subscription};
use crate::state::session::{SessionRole, SessionState, SessionStore};

/// Outcome of one guard evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the requested destination.
    Permit,
    /// Render nothing and replace the current history entry with this path.
    Redirect(&'static str),
}

impl GuardDecision {
    pub fn permits(self) -> bool {
        matches!(self, Self::Permit)
    }
}

/// Fixed-priority access decision; first matching rule wins.
pub fn decide(state: &SessionState, path: &str) -> GuardDecision {
    if !state.is_authenticated() {
        return GuardDecision::Redirect(LOGIN);
    }
    if state.role() == Some(SessionRole::Leader) && !state.agreed_terms() && !paths::is_destination(path, TERMS) {
        return GuardDecision::Redirect(TERMS);
    }
    GuardDecision::Permit
}

/// Navigation mechanism consumed by the guard.
pub trait Navigator {
    /// Path of the destination currently shown.
    fn current_path(&self) -> String;
    /// Navigate to `path`, replacing the current history entry.
    fn replace(&self, path: &str);
    /// Be told about every change of the current path.
    fn subscribe(&self, listener: Box<dyn Fn(&str)>) -> Subscription;
}

/// Applies guard decisions through a `Navigator`.
///
/// A redirect to the path already shown does nothing, and so does repeating
/// a redirect that was issued from the same path and has not landed yet.
pub struct RedirectExecutor<N> {
    navigator: N,
    pending: RefCell<Option<(String, &'static str)>>,
}

impl<N: Navigator> RedirectExecutor<N> {
    pub fn new(navigator: N) -> Self {
        Self { navigator, pending: RefCell::new(None) }
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Returns `true` when a navigation was issued.
    pub fn apply(&self, decision: GuardDecision) -> bool {
        let GuardDecision::Redirect(target) = decision else {
            self.pending.borrow_mut().take();
            return false;
        };

        let from = self.navigator.current_path();
        if paths::is_destination(&from, target) {
            self.pending.borrow_mut().take();
            return false;
        }
        {
            let mut pending = self.pending.borrow_mut();
            if pending.as_ref().is_some_and(|(p_from, p_target)| *p_target == target && *p_from == from) {
                return false;
            }
            *pending = Some((from.clone(), target));
        }

        log::debug!("guard redirect {from} -> {target}");
        self.navigator.replace(target);
        true
    }
}

/// Session-store-bound guard for one rendering host.
pub struct RouteGuard<N> {
    store: SessionStore,
    executor: RedirectExecutor<N>,
}

impl<N: Navigator + 'static> RouteGuard<N> {
    pub fn new(store: SessionStore, navigator: N) -> Self {
        Self { store, executor: RedirectExecutor::new(navigator) }
    }

    pub fn navigator(&self) -> &N {
        self.executor.navigator()
    }

    /// Decision for the current session and path, without side effects.
    pub fn evaluate(&self) -> GuardDecision {
        let path = self.executor.navigator().current_path();
        self.store.with(|state| decide(state, &path))
    }

    /// Evaluate and carry out any redirect.
    ///
    /// Returns the decision that holds after the redirect was issued: with a
    /// navigator that moves synchronously this is the decision for the new
    /// path, otherwise the redirect is still pending and rendering stays off.
    pub fn enforce(&self) -> GuardDecision {
        let decision = self.evaluate();
        if self.executor.apply(decision) { self.evaluate() } else { decision }
    }

    /// Re-run `enforce` on every session change and every path change,
    /// passing each resulting decision to `on_decision`.
    ///
    /// Does not evaluate immediately; hosts call `enforce` once for the
    /// initial state. Dropping the returned `GuardWatch` stops both feeds.
    pub fn watch(self: &Rc<Self>, on_decision: impl Fn(GuardDecision) + 'static) -> GuardWatch {
        let on_decision: Rc<dyn Fn(GuardDecision)> = Rc::new(on_decision);

        let guard = Rc::downgrade(self);
        let report = Rc::clone(&on_decision);
        let session = self.store.subscribe(move |_| {
            if let Some(guard) = guard.upgrade() {
                report(guard.enforce());
            }
        });

        let guard = Rc::downgrade(self);
        let navigation = self.navigator().subscribe(Box::new(move |_| {
            if let Some(guard) = guard.upgrade() {
                on_decision(guard.enforce());
            }
        }));

        GuardWatch { _session: session, _navigation: navigation }
    }
}

/// Keeps a `RouteGuard` subscribed to its session and navigation feeds.
#[derive(Debug)]
pub struct GuardWatch {
    _session: Subscription,
    _navigation: Subscription,
}

struct MemoryHistoryInner {
    entries: RefCell<Vec<String>>,
    replaces: Cell<usize>,
    listeners: Listeners<str>,
}

/// In-memory history stack; clones share the same history.
#[derive(Clone)]
pub struct MemoryNavigator {
    inner: Rc<MemoryHistoryInner>,
}

impl MemoryNavigator {
    pub fn new(initial: &str) -> Self {
        Self {
            inner: Rc::new(MemoryHistoryInner {
                entries: RefCell::new(vec![initial.to_owned()]),
                replaces: Cell::new(0),
                listeners: Listeners::new(),
            }),
        }
    }

    /// User-initiated navigation that adds a history entry.
    pub fn push(&self, path: &str) {
        self.inner.entries.borrow_mut().push(path.to_owned());
        self.inner.listeners.notify(path);
    }

    pub fn entries(&self) -> Vec<String> {
        self.inner.entries.borrow().clone()
    }

    pub fn replace_count(&self) -> usize {
        self.inner.replaces.get()
    }
}

impl Navigator for MemoryNavigator {
    fn current_path(&self) -> String {
        self.inner.entries.borrow().last().cloned().unwrap_or_else(|| paths::HOME.to_owned())
    }

    fn replace(&self, path: &str) {
        {
            let mut entries = self.inner.entries.borrow_mut();
            match entries.last_mut() {
                Some(last) => path.clone_into(last),
                None => entries.push(path.to_owned()),
            }
        }
        self.inner.replaces.set(self.inner.replaces.get() + 1);
        self.inner.listeners.notify(path);
    }

    fn subscribe(&self, listener: Box<dyn Fn(&str)>) -> Subscription {
        self.inner.listeners.subscribe(listener)
    }
}
