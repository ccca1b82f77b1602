//! Single headline metric card.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    title: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(default = "blue")] color: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card stat-card--{color}")>
            <h3 class="stat-card__title">{title}</h3>
            <p class=format!("stat-card__value stat-card__value--{color}")>{move || value.get()}</p>
        </div>
    }
}
