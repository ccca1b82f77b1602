//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `logs`, `users`, `submit`) so pages
//! depend on small focused models. Everything except `session_context` is
//! plain data with pure transitions and is tested without a browser.

pub mod admin;
pub mod logs;
pub mod session;
pub mod session_context;
pub mod submit;
pub mod users;
