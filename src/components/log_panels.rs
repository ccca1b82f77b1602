//! Recent-leads cards and the activity table, side by side.
//!
//! Both dashboards render the same pair; only the empty-state copy differs.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use super::lead_card::LeadCard;
use super::trigger_log::TriggerLogTable;
use crate::state::logs::LogsState;

/// Recent leads shown as cards.
pub const RECENT_LEADS: usize = 5;

#[component]
pub fn LogPanels(
    logs: RwSignal<LogsState>,
    empty_leads: &'static str,
    empty_activity: &'static str,
) -> impl IntoView {
    let recent = move || {
        let recent = logs.with(|l| l.recent(RECENT_LEADS));
        if recent.is_empty() {
            view! { <p class="empty-state">{empty_leads}</p> }.into_any()
        } else {
            recent.into_iter().map(|log| view! { <LeadCard log=log/> }).collect_view().into_any()
        }
    };
    let activity = move || {
        let items = logs.with(|l| l.items.clone());
        if items.is_empty() {
            view! { <p class="empty-state">{empty_activity}</p> }.into_any()
        } else {
            view! { <TriggerLogTable logs=items/> }.into_any()
        }
    };

    view! {
        <div class="dashboard-page__main-grid">
            <section class="dashboard-page__section">
                <h2 class="dashboard-page__section-title">"Recent Leads"</h2>
                <div class="dashboard-page__leads-list">{recent}</div>
            </section>
            <section class="dashboard-page__section">
                <h2 class="dashboard-page__section-title">"Activity Logs"</h2>
                {activity}
            </section>
        </div>
    }
}
