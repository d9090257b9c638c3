//! Networking modules for the admin REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the `AuthApi` collaborator trait and its HTTP client, `mock`
//! serves canned responses, `backend` picks one per build configuration, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod backend;
pub mod mock;
pub mod types;
