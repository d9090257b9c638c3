//! # club-admin
//!
//! Leptos + WASM admin dashboard for club leaders and the club union.
//!
//! The crate is organized around a small gating core: `state::session` holds
//! the authentication state of the running app and `routing::guard` decides,
//! on every navigation and every session change, whether a protected screen
//! may render or which screen the user must be sent to instead. Pages,
//! components, and the REST client in `net` are glue around that core.

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// Browser entry point: install panic/console hooks and mount the app.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
