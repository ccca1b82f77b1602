//! Admin dashboard: system overview, user management, analytics, settings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered behind `ProtectedRoute` with the admin role. Logs and users are
//! fetched once on mount; user toggles patch the list in place.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use super::loaders::{load_logs, load_users, toggle_user};
use crate::components::chart::{CHART_HOURS, LeadsChart};
use crate::components::error_display::ErrorDisplay;
use crate::components::header::Header;
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::log_panels::LogPanels;
use crate::components::stat_card::StatCard;
use crate::components::user_table::UserTable;
use crate::config::DashboardConfig;
use crate::state::admin::AdminTab;
use crate::state::logs::LogsState;
use crate::state::session_context::use_session;
use crate::state::users::UsersState;
use crate::util::clock::today;

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = use_session();
    let config = use_context::<DashboardConfig>().unwrap_or_default();
    let logs = RwSignal::new(LogsState::default());
    let users = RwSignal::new(UsersState::default());
    let tab = RwSignal::new(AdminTab::default());
    let today = today();

    load_logs(session, logs);
    load_users(session, users);

    let log_stats = Memo::new(move |_| logs.with(|l| l.stats(&today)));
    let user_stats = Memo::new(move |_| users.with(UsersState::stats));
    let initial_load = move || {
        logs.with(|l| l.loading && l.items.is_empty()) || users.with(|u| u.loading && u.items.is_empty())
    };
    // Log errors take precedence; both banners share one slot.
    let banner = Signal::derive(move || logs.with(|l| l.error.clone()).or_else(|| users.with(|u| u.error.clone())));
    let on_dismiss = Callback::new(move |()| {
        logs.update(LogsState::dismiss_error);
        users.update(UsersState::dismiss_error);
    });
    let on_toggle = Callback::new(move |(user_id, is_active): (String, bool)| {
        toggle_user(session, users, user_id, is_active);
    });

    let tabs = AdminTab::ALL
        .into_iter()
        .map(|t| {
            view! {
                <button
                    id=format!("admin-tab-{}", t.id())
                    class="dashboard-page__nav-item"
                    class:dashboard-page__nav-item--active=move || tab.get() == t
                    on:click=move |_| tab.set(t)
                >
                    {t.label()}
                </button>
            }
        })
        .collect_view();

    let overview = move || {
        view! {
            <div class="dashboard-page__stats-grid dashboard-page__stats-grid--admin">
                <StatCard title="Total Leads" value=Signal::derive(move || log_stats.get().total_leads.to_string())/>
                <StatCard
                    title="Success Rate"
                    color="green"
                    value=Signal::derive(move || format!("{}%", log_stats.get().success_rate))
                />
                <StatCard
                    title="Total Users"
                    color="purple"
                    value=Signal::derive(move || user_stats.get().total_users.to_string())
                />
                <StatCard
                    title="Active Users"
                    color="yellow"
                    value=Signal::derive(move || user_stats.get().active_users.to_string())
                />
            </div>
            {move || view! { <LeadsChart buckets=logs.with(|l| l.hourly_counts(CHART_HOURS))/> }}
            <LogPanels
                logs=logs
                empty_leads="No leads found in the system."
                empty_activity="No activity logs found in the system."
            />
        }
    };

    let user_management = move || {
        view! {
            <section class="dashboard-page__section">
                <h2 class="dashboard-page__section-title">"User Management"</h2>
                <p class="dashboard-page__section-subtitle">"Manage user accounts and permissions"</p>
                <UserTable
                    users=Signal::derive(move || users.with(|u| u.items.clone()))
                    pending=Signal::derive(move || users.with(|u| u.pending_toggle.clone()))
                    on_toggle=on_toggle
                />
            </section>
        }
    };

    let analytics = move || {
        view! {
            <div class="dashboard-page__analytics-grid">
                <div class="dashboard-page__analytics-card">
                    <h3 class="dashboard-page__analytics-title">"Lead Conversion Rate"</h3>
                    <div class="dashboard-page__analytics-value">{move || format!("{}%", log_stats.get().success_rate)}</div>
                    <p class="dashboard-page__analytics-description">"Successfully processed leads"</p>
                </div>
                <div class="dashboard-page__analytics-card">
                    <h3 class="dashboard-page__analytics-title">"Outcomes"</h3>
                    <dl class="dashboard-page__analytics-list">
                        <dt>"Saved"</dt>
                        <dd>{move || log_stats.get().success_count}</dd>
                        <dt>"Failed"</dt>
                        <dd>{move || log_stats.get().failure_count}</dd>
                        <dt>"No contact info"</dt>
                        <dd>{move || log_stats.get().no_contact_count}</dd>
                        <dt>"Today"</dt>
                        <dd>{move || log_stats.get().today_count}</dd>
                    </dl>
                </div>
                <div class="dashboard-page__analytics-card">
                    <h3 class="dashboard-page__analytics-title">"Accounts"</h3>
                    <dl class="dashboard-page__analytics-list">
                        <dt>"Admins"</dt>
                        <dd>{move || user_stats.get().admin_users}</dd>
                        <dt>"Users"</dt>
                        <dd>{move || user_stats.get().regular_users}</dd>
                        <dt>"Active rate"</dt>
                        <dd>{move || format!("{}%", user_stats.get().active_rate)}</dd>
                    </dl>
                </div>
            </div>
        }
    };

    let settings = {
        let DashboardConfig { api_base_url, environment } = config;
        move || {
            view! {
                <div class="dashboard-page__analytics-grid">
                    <section class="dashboard-page__settings-section">
                        <h3 class="dashboard-page__settings-title">"System Configuration"</h3>
                        <label class="dashboard-page__settings-label" for="settings-api">"API Endpoint"</label>
                        <input
                            id="settings-api"
                            class="dashboard-page__settings-input"
                            type="text"
                            readonly=true
                            prop:value=api_base_url.clone()
                        />
                        <label class="dashboard-page__settings-label" for="settings-env">"Environment"</label>
                        <input
                            id="settings-env"
                            class="dashboard-page__settings-input"
                            type="text"
                            readonly=true
                            prop:value=environment.clone()
                        />
                    </section>
                </div>
            }
        }
    };

    let body = move || match tab.get() {
        AdminTab::Overview => overview().into_any(),
        AdminTab::Users => user_management().into_any(),
        AdminTab::Analytics => analytics().into_any(),
        AdminTab::Settings => settings().into_any(),
    };

    view! {
        <div class="dashboard-page">
            <Header title="Lead Extraction Dashboard - Admin" fallback_name="Admin"/>
            <nav class="dashboard-page__nav">{tabs}</nav>
            <Show when=move || !initial_load() fallback=|| view! { <LoadingSpinner size="lg"/> }>
                <div class="dashboard-page__content">
                    {body.clone()}
                    <ErrorDisplay error=banner on_dismiss=on_dismiss/>
                </div>
            </Show>
        </div>
    }
}
