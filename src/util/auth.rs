//! Shared route-guard redirect helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected and public route wrappers apply identical redirect behavior:
//! whenever the current decision names a target other than the current
//! location, navigate there, replacing the history entry so the back button
//! does not bounce through the guard.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use super::guard::RouteDecision;

/// Options for guard-initiated navigation.
pub fn guard_navigate_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Navigate whenever `decision` yields a redirect away from `current_path`.
pub fn install_guard_redirect<D, P, F>(decision: D, current_path: P, navigate: F)
where
    D: Fn() -> RouteDecision + 'static,
    P: Fn() -> String + 'static,
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let decision = decision();
        if let Some(path) = decision.redirect_from(&current_path()) {
            log::debug!("route guard redirect: {decision:?} -> {path}");
            navigate(path, guard_navigate_options());
        }
    });
}
