//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, clock, navigation)
//! from page and component logic to keep them testable.

pub mod auth;
pub mod clock;
pub mod guard;
pub mod session_storage;
