//! Dashboard header with title, greeting, and sign-out.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shared by the user and admin dashboards, which only render for an
//! authenticated session. Signing out clears the persisted
//! session and navigates to `/login`.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::UserProfile;
use crate::state::session_context::use_session;
use crate::util::guard::AppRoute;

/// "Welcome back, <name>", using `fallback` when the user has no name.
pub fn welcome_subtitle(user: Option<&UserProfile>, fallback: &str) -> String {
    let name = user.map(|u| u.full_name.trim()).filter(|n| !n.is_empty()).unwrap_or(fallback);
    format!("Welcome back, {name}")
}

#[component]
pub fn Header(title: &'static str, #[prop(default = "User")] fallback_name: &'static str) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let subtitle = move || welcome_subtitle(session.user().as_ref(), fallback_name);
    let on_sign_out = move |_| {
        session.logout();
        navigate(AppRoute::Login.path(), NavigateOptions::default());
    };

    view! {
        <header class="header">
            <a class="header__logo-link" href="/">
                <span class="header__brand">"Lead Dashboard"</span>
            </a>
            <div class="header__titles">
                <h1 class="header__title">{title}</h1>
                <p class="header__subtitle">{subtitle}</p>
            </div>
            <button class="header__sign-out" on:click=on_sign_out>
                "Sign Out"
            </button>
        </header>
    }
}
