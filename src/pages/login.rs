//! Login and registration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered behind `PublicRoute`, so an existing session never sees it. A
//! successful login or registration commits the session and navigates to the
//! role's home view returned in the [`AuthOutcome`](crate::state::session::AuthOutcome).

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::error_display::ErrorDisplay;
use crate::net::auth::RegisterForm;
use crate::state::session_context::use_session;

const MISSING_CREDENTIALS: &str = "Enter your email and password.";
const MISSING_FULL_NAME: &str = "Enter your full name.";

/// Trim the email and require both fields.
///
/// # Errors
///
/// Returns the message shown above the form when a field is blank.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_CREDENTIALS);
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Validate the registration fields into a [`RegisterForm`] for a regular user.
///
/// # Errors
///
/// Returns the message shown above the form when a field is blank.
pub fn validate_register_input(email: &str, password: &str, full_name: &str) -> Result<RegisterForm, &'static str> {
    let (email, password) = validate_login_input(email, password)?;
    let full_name = full_name.trim();
    if full_name.is_empty() {
        return Err(MISSING_FULL_NAME);
    }
    Ok(RegisterForm::new(email, password, full_name))
}

pub fn submit_label(registering: bool, busy: bool) -> &'static str {
    match (registering, busy) {
        (false, false) => "Sign in",
        (false, true) => "Signing in...",
        (true, false) => "Create account",
        (true, true) => "Creating account...",
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let full_name = RwSignal::new(String::new());
    let registering = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        let register = registering.get_untracked();
        let form = if register {
            validate_register_input(&email_value, &password_value, &full_name.get_untracked()).map(Some)
        } else {
            validate_login_input(&email_value, &password_value).map(|_| None)
        };
        let form = match form {
            Ok(form) => form,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = match form {
                    Some(form) => session.register(form).await,
                    None => session.login(email_value, password_value).await,
                };
                match result {
                    Ok(outcome) => {
                        log::info!("signed in as {}", outcome.user.email);
                        navigate(outcome.home.path(), NavigateOptions::default());
                    }
                    Err(e) => error.set(Some(e.to_string())),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (form, &navigate, session);
    };

    let on_toggle_mode = move |_| {
        registering.update(|r| *r = !*r);
        error.set(None);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2 class="login-card__title">
                    {move || if registering.get() { "Create your account" } else { "Log in to your account" }}
                </h2>
                <p class="login-card__subtitle">"Welcome back! Please enter your details below."</p>
                <form class="login-form" on:submit=on_submit>
                    <Show when=move || registering.get()>
                        <label class="login-label" for="full_name">"Full name"</label>
                        <input
                            id="full_name"
                            class="login-input"
                            type="text"
                            autocomplete="name"
                            placeholder="Enter your full name"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </Show>
                    <label class="login-label" for="email">"Email"</label>
                    <input
                        id="email"
                        class="login-input"
                        type="email"
                        autocomplete="email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="login-label" for="password">"Password"</label>
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Enter your password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <ErrorDisplay error=error on_dismiss=Callback::new(move |()| error.set(None))/>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || submit_label(registering.get(), busy.get())}
                    </button>
                </form>
                <button class="login-card__switch" type="button" on:click=on_toggle_mode>
                    {move || if registering.get() { "Already have an account? Sign in" } else { "Need an account? Register" }}
                </button>
            </div>
        </div>
    }
}
