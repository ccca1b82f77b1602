//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetches, form submission) and
//! delegates rendering details to `components`. Access control lives in the
//! route wrappers, not in the pages.

pub mod admin;
pub mod dashboard;
pub(crate) mod loaders;
pub mod login;
pub mod not_found;
