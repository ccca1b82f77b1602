//! Dismissible error banner.

use leptos::prelude::*;

/// Renders nothing while `error` is `None`.
#[component]
pub fn ErrorDisplay(
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional)] on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some)>
            <div class="error-display" role="alert">
                <p class="error-display__title">
                    <strong>"Error: "</strong>
                    {move || error.get().unwrap_or_default()}
                </p>
                {on_dismiss.map(|cb| {
                    view! {
                        <button
                            class="error-display__dismiss"
                            title="Dismiss"
                            aria-label="Dismiss error"
                            on:click=move |_| cb.run(())
                        >
                            "✕"
                        </button>
                    }
                })}
            </div>
        </Show>
    }
}
