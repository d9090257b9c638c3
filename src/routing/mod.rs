//! Destinations and the route guard that gates them.
//!
//! ARCHITECTURE
//! ============
//! `paths` names every destination; `guard` holds the pure decision function,
//! the redirect executor, and the `RouteGuard` that wires both to the session
//! store and a `Navigator`.

pub mod guard;
pub mod paths;
