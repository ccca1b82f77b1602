//! Card summarizing one extracted lead.

#[cfg(test)]
#[path = "lead_card_test.rs"]
mod lead_card_test;

use leptos::prelude::*;

use crate::net::types::{SaveStatus, TriggerLog};

/// Uppercased first letter of the lead's name, or `?`.
pub fn avatar_initial(name: &str) -> String {
    name.trim().chars().next().map_or_else(|| "?".to_owned(), |c| c.to_uppercase().collect())
}

/// Lead name or a placeholder for messages without one.
pub fn lead_name(name: &str) -> &str {
    let name = name.trim();
    if name.is_empty() { "Unknown Name" } else { name }
}

pub fn status_glyph(status: SaveStatus) -> &'static str {
    if status == SaveStatus::Success { "✓" } else { "✗" }
}

#[component]
pub fn LeadCard(log: TriggerLog) -> impl IntoView {
    let initial = avatar_initial(&log.extracted.name);
    let name = lead_name(&log.extracted.name).to_owned();
    let date = log.date().unwrap_or_default().to_owned();
    let status = log.save_status;

    view! {
        <div class="lead-card">
            <div class="lead-card__header">
                <div class="lead-card__avatar">{initial}</div>
                <div class="lead-card__user-info">
                    <h3 class="lead-card__name">{name}</h3>
                    <p class="lead-card__date">{date}</p>
                </div>
                <span
                    class=format!("lead-card__status lead-card__status--{}", status.css_modifier())
                    title=status.label()
                >
                    {status_glyph(status)}
                </span>
            </div>
            <dl class="lead-card__details">
                <dt class="lead-card__detail-label">"Email:"</dt>
                <dd class="lead-card__detail-value">{log.extracted.email}</dd>
                <dt class="lead-card__detail-label">"Company:"</dt>
                <dd class="lead-card__detail-value">{log.extracted.company}</dd>
            </dl>
        </div>
    }
}
