//! Reactive session context shared with every route.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` constructs one [`SessionContext`] over the browser gateway and
//! provides it through Leptos context; components obtain it with
//! [`use_session`]. Restoration runs once, client-side, from an effect, so
//! the server-rendered HTML and the first hydrated frame both show the
//! loading state.
//!
//! The context is generic over the gateway's transport and store so the same
//! flows run against scripted doubles in tests.

#[cfg(test)]
#[path = "session_context_test.rs"]
mod session_context_test;

use leptos::prelude::*;

use super::session::{AuthOutcome, Session, SessionPhase, SessionState, SessionView};
use crate::net::api::ApiClient;
use crate::net::auth::{AuthGateway, RegisterForm};
use crate::net::error::AuthError;
use crate::net::transport::{HttpTransport, Transport};
use crate::net::types::UserProfile;
use crate::util::session_storage::{BrowserStorage, KeyValueStore, SessionStore};

/// Gateway wired to `fetch` and `localStorage`.
pub type BrowserGateway = AuthGateway<HttpTransport, BrowserStorage>;

/// Handle to the session state and the gateway that persists it.
pub struct SessionContext<T = HttpTransport, S = BrowserStorage> {
    state: RwSignal<SessionState>,
    gateway: StoredValue<AuthGateway<T, S>>,
}

impl<T, S> Clone for SessionContext<T, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, S> Copy for SessionContext<T, S> {}

impl SessionContext {
    /// Context over the browser gateway for `api`.
    pub fn browser(api: ApiClient<HttpTransport>) -> Self {
        Self::new(AuthGateway::new(api, SessionStore::new(BrowserStorage)))
    }
}

impl<T, S> SessionContext<T, S>
where
    T: Transport + Clone + Send + Sync + 'static,
    S: KeyValueStore + Clone + Send + Sync + 'static,
{
    pub fn new(gateway: AuthGateway<T, S>) -> Self {
        Self { state: RwSignal::new(SessionState::default()), gateway: StoredValue::new(gateway) }
    }

    /// Provide this context to all descendants.
    pub fn provide(self) -> Self {
        provide_context(self);
        self
    }

    /// Read the persisted session. Only the first call has any effect.
    pub fn restore(self) {
        if self.state.with_untracked(SessionState::phase) != SessionPhase::Init {
            return;
        }
        self.state.update(|s| {
            if let Err(e) = s.begin_restore() {
                log::warn!("{e}");
            }
        });
        let restored = self.gateway.with_value(AuthGateway::restore);
        log::debug!("session restored: {}", restored.is_some());
        self.state.update(|s| {
            if let Err(e) = s.finish_restore(restored) {
                log::warn!("{e}");
            }
        });
    }

    pub fn view(self) -> SessionView {
        self.state.with(SessionState::view)
    }

    pub fn user(self) -> Option<UserProfile> {
        self.state.with(|s| s.user().cloned())
    }

    /// Current user for event handlers, read without tracking.
    pub fn user_untracked(self) -> Option<UserProfile> {
        self.state.with_untracked(|s| s.user().cloned())
    }

    pub fn is_admin(self) -> bool {
        self.state.with(SessionState::is_admin)
    }

    /// Bearer token for request attribution, read without tracking.
    pub fn token_untracked(self) -> Option<String> {
        self.state.with_untracked(|s| s.token().map(ToOwned::to_owned))
    }

    /// REST client sharing the gateway's base URL.
    pub fn api(self) -> ApiClient<T> {
        self.gateway.with_value(|g| g.api().clone())
    }

    /// Log in and commit the session.
    ///
    /// # Errors
    ///
    /// Returns the gateway's [`AuthError`], or [`AuthError::Session`] when
    /// the session is still loading. Either way the phase is unchanged.
    pub async fn login(self, email: String, password: String) -> Result<AuthOutcome, AuthError> {
        let gateway = self.gateway.get_value();
        let session = gateway.login(&email, &password).await?;
        self.commit(session)
    }

    /// Register and commit the session.
    ///
    /// # Errors
    ///
    /// Same as [`SessionContext::login`].
    pub async fn register(self, form: RegisterForm) -> Result<AuthOutcome, AuthError> {
        let gateway = self.gateway.get_value();
        let session = gateway.register(form).await?;
        self.commit(session)
    }

    fn commit(self, session: Session) -> Result<AuthOutcome, AuthError> {
        let outcome = AuthOutcome::for_user(session.user.clone());
        let mut committed = Ok(());
        self.state.update(|s| committed = s.commit_login(session));
        if let Err(e) = committed {
            log::warn!("{e}");
            return Err(e.into());
        }
        Ok(outcome)
    }

    /// Clear the persisted session and return to anonymous.
    pub fn logout(self) {
        self.gateway.with_value(AuthGateway::logout);
        self.state.update(|s| {
            if let Err(e) = s.sign_out() {
                log::warn!("{e}");
            }
        });
    }
}

/// The session context provided by `App`.
///
/// # Panics
///
/// Panics if called outside the `App` component tree.
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
