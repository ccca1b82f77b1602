//! Route table and role-gated navigation decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guard components evaluate these functions on every render against the
//! current [`SessionView`]. They are pure, so the redirect rules can be
//! tested without a router.
//!
//! Evaluation order is fixed: loading first, then authentication, then role.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::net::types::Role;
use crate::state::session::SessionView;

/// Navigable views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Login,
    Dashboard,
    Admin,
    NotFound,
}

impl AppRoute {
    /// Canonical path. `NotFound` has none of its own and maps to `/404`.
    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
            Self::Admin => "/admin",
            Self::NotFound => "/404",
        }
    }

    /// Resolve a location path. `/` is an alias for the dashboard; anything
    /// unmatched is `NotFound` regardless of session state.
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = trimmed.trim_end_matches('/');
        match trimmed {
            "" | "/dashboard" => Self::Dashboard,
            "/login" => Self::Login,
            "/admin" => Self::Admin,
            _ => Self::NotFound,
        }
    }
}

/// Landing route for a role.
pub fn role_home(is_admin: bool) -> AppRoute {
    if is_admin { AppRoute::Admin } else { AppRoute::Dashboard }
}

/// Outcome of evaluating a guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    RedirectToLogin,
    RedirectToRoleHome(AppRoute),
    ShowLoading,
}

impl RouteDecision {
    /// Route to navigate to, if this decision redirects.
    pub fn target(self) -> Option<AppRoute> {
        match self {
            Self::RedirectToLogin => Some(AppRoute::Login),
            Self::RedirectToRoleHome(route) => Some(route),
            Self::Allow | Self::ShowLoading => None,
        }
    }

    /// Path to navigate to, if this decision redirects.
    pub fn redirect_path(self) -> Option<&'static str> {
        self.target().map(AppRoute::path)
    }

    /// Path to navigate to from `current_path`. `None` when the location
    /// already resolves to the target, so a guard never re-pushes its own route.
    pub fn redirect_from(self, current_path: &str) -> Option<&'static str> {
        self.target()
            .filter(|target| AppRoute::from_path(current_path) != *target)
            .map(AppRoute::path)
    }
}

/// Guard for views that need a session, optionally with a role.
pub fn protected_decision(view: SessionView, required_role: Option<Role>) -> RouteDecision {
    if view.loading {
        return RouteDecision::ShowLoading;
    }
    if !view.is_authenticated {
        return RouteDecision::RedirectToLogin;
    }
    if required_role == Some(Role::Admin) && !view.is_admin {
        return RouteDecision::RedirectToRoleHome(role_home(false));
    }
    RouteDecision::Allow
}

/// Guard for views only anonymous visitors should see, like the login page.
pub fn public_decision(view: SessionView) -> RouteDecision {
    if view.loading {
        return RouteDecision::ShowLoading;
    }
    if view.is_authenticated {
        return RouteDecision::RedirectToRoleHome(role_home(view.is_admin));
    }
    RouteDecision::Allow
}

/// Target and label of the "back" link on the not-found view.
pub fn not_found_link(view: SessionView) -> (AppRoute, &'static str) {
    if view.is_authenticated {
        (role_home(view.is_admin), "Go to Dashboard")
    } else {
        (AppRoute::Login, "Go to Login")
    }
}
