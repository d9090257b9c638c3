//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration. Every page except `login` is
//! mounted inside `components::protected::Protected` by the router.

pub mod admin;
pub mod club;
pub mod home;
pub mod login;
pub mod terms;
