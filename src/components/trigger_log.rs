//! Activity table of webhook triggers.

use leptos::prelude::*;

use super::lead_card::status_glyph;
use crate::net::types::TriggerLog;

#[component]
pub fn TriggerLogTable(logs: Vec<TriggerLog>) -> impl IntoView {
    let rows = logs
        .into_iter()
        .map(|log| {
            let time = log.time().unwrap_or_default().to_owned();
            let status = log.save_status;
            view! {
                <tr class="trigger-log__tr">
                    <td class="trigger-log__td trigger-log__td--time">{time}</td>
                    <td class="trigger-log__td trigger-log__td--message">{log.message}</td>
                    <td class="trigger-log__td trigger-log__td--status">
                        <span
                            class=format!("trigger-log__status trigger-log__status--{}", status.css_modifier())
                            title=status.label()
                        >
                            {status_glyph(status)}
                        </span>
                    </td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div class="trigger-log">
            <h3 class="trigger-log__title">"Trigger Logs"</h3>
            <table class="trigger-log__table">
                <thead>
                    <tr>
                        <th class="trigger-log__th">"Time"</th>
                        <th class="trigger-log__th">"Message"</th>
                        <th class="trigger-log__th">"Status"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}
