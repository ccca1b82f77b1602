//! Route wrappers that gate rendering on session state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` wraps each route's page in one of these. The decision comes from
//! the pure functions in `util::guard`; redirects are applied from an effect
//! so they happen after hydration, and the wrapped page never renders unless
//! the decision is `Allow`.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::{use_location, use_navigate};

use super::loading_spinner::LoadingSpinner;
use crate::net::types::Role;
use crate::state::session_context::use_session;
use crate::util::auth::install_guard_redirect;
use crate::util::guard::{RouteDecision, protected_decision, public_decision};

/// Render `children` only for an authenticated session holding `required_role`.
#[component]
pub fn ProtectedRoute(#[prop(optional)] required_role: Option<Role>, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let decision = Memo::new(move |_| protected_decision(session.view(), required_role));
    let pathname = use_location().pathname;
    install_guard_redirect(move || decision.get(), move || pathname.get(), use_navigate());
    gated_view(decision, children)
}

/// Render `children` only for anonymous visitors; others go to their home.
#[component]
pub fn PublicRoute(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let decision = Memo::new(move |_| public_decision(session.view()));
    let pathname = use_location().pathname;
    install_guard_redirect(move || decision.get(), move || pathname.get(), use_navigate());
    gated_view(decision, children)
}

fn gated_view(decision: Memo<RouteDecision>, children: ChildrenFn) -> impl IntoView {
    move || {
        if decision.get() == RouteDecision::Allow {
            children().into_any()
        } else {
            view! { <LoadingSpinner size="lg"/> }.into_any()
        }
    }
}
