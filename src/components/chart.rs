//! "Leads per Hour" bar chart drawn with plain CSS bars.

#[cfg(test)]
#[path = "chart_test.rs"]
mod chart_test;

use leptos::prelude::*;

/// Hour buckets shown on the chart.
pub const CHART_HOURS: usize = 24;

/// Bar height as a percentage of the tallest bucket.
pub fn bar_height_pct(count: usize, max: usize) -> u32 {
    crate::state::logs::percentage(count, max)
}

/// Hover text for one hourly bar.
pub fn bar_title(label: &str, count: usize) -> String {
    format!("Time: {label} ({count} leads)")
}

#[component]
pub fn LeadsChart(buckets: Vec<(String, usize)>) -> impl IntoView {
    let max = buckets.iter().map(|(_, count)| *count).max().unwrap_or(0);
    let is_empty = buckets.is_empty();
    let bars = buckets
        .into_iter()
        .map(|(label, count)| {
            let style = format!("height: {}%", bar_height_pct(count, max));
            let title = bar_title(&label, count);
            view! {
                <div class="chart__bar-slot" title=title>
                    <div class="chart__bar" style=style></div>
                    <span class="chart__label">{label}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="chart">
            <div class="chart__header">
                <h3 class="chart__title">"Leads per Hour"</h3>
                <p class="chart__subtitle">"Last 24 hours"</p>
            </div>
            <div class="chart__container">{bars}</div>
            <Show when=move || is_empty>
                <p class="chart__empty-text">"No data available"</p>
            </Show>
        </div>
    }
}
