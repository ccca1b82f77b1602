//! Login, registration, and logout against the auth endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthGateway` is the only writer of the persisted session. The session
//! context calls it and then moves its own state machine; nothing else
//! touches the `token`/`user` storage entries.
//!
//! ERROR HANDLING
//! ==============
//! A session is committed only after the `/auth/me` identity lookup has
//! succeeded. Every earlier failure returns an [`AuthError`] without touching
//! storage, so a failed attempt leaves the previous persisted values intact.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use super::api::ApiClient;
use super::error::AuthError;
use super::transport::Transport;
use super::types::{LoginRequest, RegisterRequest, Role, TokenResponse};
use crate::state::session::Session;
use crate::util::session_storage::{KeyValueStore, SessionStore};

/// Registration form contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: Role,
}

impl RegisterForm {
    /// New standard-user registration.
    pub fn new(email: impl Into<String>, password: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into(), full_name: full_name.into(), role: Role::User }
    }

    fn into_request(self) -> RegisterRequest {
        RegisterRequest {
            username: self.email.clone(),
            email: self.email,
            password: self.password,
            full_name: self.full_name,
            role: self.role,
        }
    }
}

/// Auth flows over a REST client and a session store.
#[derive(Clone, Debug)]
pub struct AuthGateway<T, S> {
    api: ApiClient<T>,
    store: SessionStore<S>,
}

impl<T: Transport, S: KeyValueStore> AuthGateway<T, S> {
    pub fn new(api: ApiClient<T>, store: SessionStore<S>) -> Self {
        Self { api, store }
    }

    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    /// Session persisted by an earlier page load, if still valid.
    pub fn restore(&self) -> Option<Session> {
        self.store.load()
    }

    /// Authenticate with email + password and commit the session.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if the credentials are refused, the identity
    /// lookup fails, or the session cannot be persisted.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let body = LoginRequest { email: email.trim().to_owned(), password: password.to_owned() };
        let token = self.api.login(&body).await?;
        self.commit(token).await
    }

    /// Create an account and commit the resulting session.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthError`] if registration is refused, the identity
    /// lookup fails, or the session cannot be persisted.
    pub async fn register(&self, form: RegisterForm) -> Result<Session, AuthError> {
        let token = self.api.register(&form.into_request()).await?;
        self.commit(token).await
    }

    /// Forget the persisted session. Calling it while logged out is harmless.
    pub fn logout(&self) {
        self.store.clear();
        log::info!("session cleared");
    }

    async fn commit(&self, token: TokenResponse) -> Result<Session, AuthError> {
        if token.access_token.trim().is_empty() {
            return Err(AuthError::Decode("empty access token".to_owned()));
        }
        let user = self
            .api
            .me(&token.access_token)
            .await
            .map_err(|e| AuthError::identity_lookup(&e))?;
        let session = Session { token: token.access_token, user };
        self.store
            .save(&session)
            .map_err(|e| AuthError::Storage(e.to_string()))?;
        log::info!("session committed for {} ({})", session.user.email, session.user.role.as_str());
        Ok(session)
    }
}
