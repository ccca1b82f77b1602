//! Centered spinner shown while the session or a collection is loading.

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner(
    #[prop(default = "md")] size: &'static str,
    #[prop(default = "Loading...")] text: &'static str,
) -> impl IntoView {
    view! {
        <div class="loading-spinner" role="status">
            <div class=format!("loading-spinner__spinner loading-spinner__spinner--{size}")></div>
            <Show when=move || !text.is_empty()>
                <p class="loading-spinner__text">{text}</p>
            </Show>
        </div>
    }
}
