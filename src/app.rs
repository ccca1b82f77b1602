//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::route_guard::{ProtectedRoute, PublicRoute};
use crate::config::DashboardConfig;
use crate::net::api::ApiClient;
use crate::net::types::Role;
use crate::pages::{admin::AdminPage, dashboard::DashboardPage, login::LoginPage, not_found::NotFoundPage};
use crate::state::session_context::SessionContext;
use crate::util::guard::AppRoute;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the dashboard config and session context, restores any persisted
/// session once in the browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = DashboardConfig::from_build_env();
    let session = SessionContext::browser(ApiClient::from_config(&config)).provide();
    provide_context(config);

    // Effects only run after hydration, so SSR output stays in the loading state.
    Effect::new(move || session.restore());

    view! {
        <Stylesheet id="leptos" href="/pkg/lead-dashboard.css"/>
        <Title text="Lead Dashboard"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <PublicRoute><LoginPage/></PublicRoute> }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                />
                <Route
                    path=StaticSegment("admin")
                    view=|| view! { <ProtectedRoute required_role=Role::Admin><AdminPage/></ProtectedRoute> }
                />
                <Route path=StaticSegment("") view=|| view! { <Redirect path=AppRoute::Dashboard.path()/> }/>
            </Routes>
        </Router>
    }
}
