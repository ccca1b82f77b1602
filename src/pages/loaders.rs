//! Fetch orchestration shared by the dashboard pages.
//!
//! ERROR HANDLING
//! ==============
//! Requests only run in the browser. Failures land in the view-model's
//! `error` field; nothing here returns an error.

use leptos::prelude::*;

use crate::state::logs::LogsState;
use crate::state::session_context::SessionContext;
use crate::state::submit::SubmitState;
use crate::state::users::UsersState;

/// Replace `logs` with a fresh `GET /webhook/logs`.
pub fn load_logs(session: SessionContext, logs: RwSignal<LogsState>) {
    logs.update(LogsState::begin_fetch);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let token = session.token_untracked();
        let result = session.api().fetch_logs(token.as_deref()).await;
        logs.update(|s| s.apply_fetch(result));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = session;
}

/// Replace `users` with a fresh `GET /auth/users`.
pub fn load_users(session: SessionContext, users: RwSignal<UsersState>) {
    users.update(UsersState::begin_fetch);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let token = session.token_untracked();
        let result = session.api().list_users(token.as_deref()).await;
        users.update(|s| s.apply_fetch(result));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = session;
}

/// Request `is_active` for `user_id` and patch the row on success.
pub fn toggle_user(session: SessionContext, users: RwSignal<UsersState>, user_id: String, is_active: bool) {
    if users.with_untracked(|s| s.pending_toggle.is_some()) {
        return;
    }
    users.update(|s| s.begin_toggle(&user_id));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let token = session.token_untracked();
        match session.api().toggle_user(token.as_deref(), &user_id, is_active).await {
            Ok(resp) => {
                log::info!("user {user_id} active={}", resp.is_active);
                users.update(|s| s.apply_toggle(&user_id, resp.is_active));
            }
            Err(e) => {
                log::warn!("toggle for {user_id} failed: {e}");
                users.update(UsersState::toggle_failed);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (session, is_active);
}

/// Submit the lead draft, then refresh `logs` once the webhook answers.
pub fn submit_lead(session: SessionContext, form: RwSignal<SubmitState>, logs: RwSignal<LogsState>) {
    let user = session.user_untracked();
    let mut request = None;
    form.update(|s| match s.begin(user.as_ref()) {
        Ok(req) => request = Some(req),
        Err(e) => log::debug!("lead submission not sent: {e}"),
    });
    let Some(request) = request else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = session.api().submit_webhook(&request).await;
        let mut refresh = false;
        form.update(|s| refresh = s.finish(result));
        if refresh {
            load_logs(session, logs);
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (request, logs);
}
