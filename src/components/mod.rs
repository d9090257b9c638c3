//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `protected` is the rendering host of the route guard; `session_bar` shows
//! who is signed in and owns the logout action.

pub mod protected;
pub mod session_bar;
