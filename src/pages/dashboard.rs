//! User dashboard: lead submission, stats, and activity.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route for regular users, rendered behind `ProtectedRoute`. Logs are
//! fetched once on mount and again after every answered submission.

use leptos::prelude::*;

use super::loaders::{load_logs, submit_lead};
use crate::components::chart::{CHART_HOURS, LeadsChart};
use crate::components::error_display::ErrorDisplay;
use crate::components::header::Header;
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::log_panels::LogPanels;
use crate::components::stat_card::StatCard;
use crate::state::logs::LogsState;
use crate::state::session_context::use_session;
use crate::state::submit::SubmitState;
use crate::util::clock::today;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let logs = RwSignal::new(LogsState::default());
    let form = RwSignal::new(SubmitState::default());
    let today = today();

    load_logs(session, logs);

    let stats = Memo::new(move |_| logs.with(|l| l.stats(&today)));
    let initial_load = move || logs.with(|l| l.loading && l.items.is_empty());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_lead(session, form, logs);
    };
    let on_refresh = move |_| load_logs(session, logs);

    view! {
        <div class="dashboard-page">
            <Header title="Lead Extraction Dashboard"/>
            <Show when=move || !initial_load() fallback=|| view! { <LoadingSpinner size="lg"/> }>
                <div class="dashboard-page__content">
                    <section class="dashboard-page__section">
                        <h2 class="dashboard-page__section-title">"Create New Lead"</h2>
                        <form class="dashboard-page__message-form" on:submit=on_submit>
                            <label class="dashboard-page__form-label" for="message">
                                "Enter message to extract lead information:"
                            </label>
                            <textarea
                                id="message"
                                class="dashboard-page__form-textarea"
                                rows="4"
                                placeholder="Example: Hi, I am Omar from Tech. My email is omar@tech.com and I'm interested in your services."
                                prop:value=move || form.with(|f| f.draft.clone())
                                on:input=move |ev| form.update(|f| f.draft = event_target_value(&ev))
                                disabled=move || form.with(|f| f.submitting)
                            ></textarea>
                            <button
                                class="dashboard-page__submit-button"
                                type="submit"
                                disabled=move || !form.with(SubmitState::can_submit)
                            >
                                {move || if form.with(|f| f.submitting) { "Processing..." } else { "Extract Lead" }}
                            </button>
                        </form>
                        <ErrorDisplay
                            error=Signal::derive(move || form.with(|f| f.error.clone()))
                            on_dismiss=Callback::new(move |()| form.update(SubmitState::dismiss_error))
                        />
                    </section>

                    <div class="dashboard-page__stats-grid">
                        <StatCard title="Total Leads" value=Signal::derive(move || stats.get().total_leads.to_string())/>
                        <StatCard
                            title="Success Rate"
                            color="green"
                            value=Signal::derive(move || format!("{}%", stats.get().success_rate))
                        />
                        <StatCard
                            title="Today's Leads"
                            color="purple"
                            value=Signal::derive(move || stats.get().today_count.to_string())
                        />
                    </div>

                    <div class="dashboard-page__toolbar">
                        <button class="dashboard-page__refresh" on:click=on_refresh disabled=move || logs.with(|l| l.loading)>
                            "Refresh"
                        </button>
                    </div>

                    {move || view! { <LeadsChart buckets=logs.with(|l| l.hourly_counts(CHART_HOURS))/> }}

                    <LogPanels
                        logs=logs
                        empty_leads="No leads found. Create your first lead using the form above."
                        empty_activity="No activity logs found. Activity will appear here once you start creating leads."
                    />

                    <ErrorDisplay
                        error=Signal::derive(move || logs.with(|l| l.error.clone()))
                        on_dismiss=Callback::new(move |()| logs.update(LogsState::dismiss_error))
                    />
                </div>
            </Show>
        </div>
    }
}
