//! Fallback view for unknown paths.

use leptos::prelude::*;

use crate::state::session_context::use_session;
use crate::util::guard::not_found_link;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let session = use_session();
    let link = Memo::new(move |_| not_found_link(session.view()));

    let on_back = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(Err(e)) = web_sys::window().map(|w| w.history().and_then(|h| h.back())) {
                log::warn!("history.back failed: {e:?}");
            }
        }
    };

    view! {
        <div class="not-found-page">
            <h1 class="not-found-page__title">"404"</h1>
            <h2 class="not-found-page__subtitle">"Page Not Found"</h2>
            <p class="not-found-page__description">
                "The page you're looking for doesn't exist or has been moved."
            </p>
            <div class="not-found-page__actions">
                <a
                    class="not-found-page__button not-found-page__button--primary"
                    href=move || link.get().0.path()
                >
                    {move || link.get().1}
                </a>
                <button class="not-found-page__button not-found-page__button--secondary" on:click=on_back>
                    "Go Back"
                </button>
            </div>
        </div>
    }
}
