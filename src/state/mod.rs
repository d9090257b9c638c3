//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the single source of truth for who is signed in; `observer`
//! carries its change notifications and `persistence` keeps it across reloads.

pub mod observer;
pub mod persistence;
pub mod session;
