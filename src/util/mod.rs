//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns from state and page logic so the
//! gating core stays testable off the browser.

pub mod storage;
