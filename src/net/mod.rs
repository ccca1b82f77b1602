//! Networking modules for the lead-extraction REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` sends raw requests, `api` turns them into typed calls,
//! `auth` runs the login/registration flows that commit a session, and
//! `types` defines the wire schema.

pub mod api;
pub mod auth;
pub mod error;
#[cfg(test)]
pub(crate) mod testing;
pub mod transport;
pub mod types;
