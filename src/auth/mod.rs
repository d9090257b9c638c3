//! Authentication flows and their errors.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call into `flow`; it is the only code that mutates the session store
//! in response to the login, terms, refresh, and logout collaborators.

pub mod error;
pub mod flow;

pub use error::AuthError;
