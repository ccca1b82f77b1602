//! User-management state for the admin dashboard.
//!
//! DESIGN
//! ======
//! Mirrors `logs`: full-replace fetches, failures become an empty list plus
//! a banner. Status toggles patch only the affected row.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use super::logs::percentage;
use crate::net::error::ApiError;
use crate::net::types::{Role, UserProfile};

pub const TOGGLE_FAILED_MESSAGE: &str = "Failed to update user status";

/// Shared user list backed by `GET /auth/users`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UsersState {
    pub items: Vec<UserProfile>,
    pub loading: bool,
    pub error: Option<String>,
    /// Row whose toggle request is in flight.
    pub pending_toggle: Option<String>,
}

/// Counters for the admin overview.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UserStats {
    pub total_users: usize,
    pub active_users: usize,
    pub admin_users: usize,
    pub regular_users: usize,
    pub active_rate: u32,
}

/// Admin accounts cannot be deactivated from the dashboard.
pub fn can_toggle(user: &UserProfile) -> bool {
    user.role != Role::Admin
}

impl UsersState {
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn apply_fetch(&mut self, result: Result<Vec<UserProfile>, ApiError>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                log::warn!("user fetch failed: {e}");
                self.items.clear();
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn begin_toggle(&mut self, user_id: &str) {
        self.pending_toggle = Some(user_id.to_owned());
    }

    /// Record the server-confirmed active state for `user_id`.
    pub fn apply_toggle(&mut self, user_id: &str, is_active: bool) {
        self.pending_toggle = None;
        if let Some(user) = self.items.iter_mut().find(|u| u.key() == user_id) {
            user.is_active = is_active;
        }
    }

    pub fn toggle_failed(&mut self) {
        self.pending_toggle = None;
        self.error = Some(TOGGLE_FAILED_MESSAGE.to_owned());
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    pub fn stats(&self) -> UserStats {
        let total_users = self.items.len();
        let active_users = self.items.iter().filter(|u| u.is_active).count();
        let admin_users = self.items.iter().filter(|u| u.role == Role::Admin).count();
        UserStats {
            total_users,
            active_users,
            admin_users,
            regular_users: total_users - admin_users,
            active_rate: percentage(active_users, total_users),
        }
    }
}
