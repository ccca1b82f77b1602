//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and data tables. They receive data
//! through props and read only the session from Leptos context.

pub mod chart;
pub mod error_display;
pub mod header;
pub mod lead_card;
pub mod loading_spinner;
pub mod log_panels;
pub mod route_guard;
pub mod stat_card;
pub mod trigger_log;
pub mod user_table;
