//! Typed REST client for the lead-extraction API.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Non-2xx responses are mapped to
//! `ApiError::Status` carrying the server's `detail` message, and bodies that
//! do not match the expected schema become `ApiError::Decode`, so callers
//! never see untyped JSON.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::transport::{ApiRequest, ApiResponse, HttpTransport, Transport};
use super::types::{
    LoginRequest, RegisterRequest, ToggleUserRequest, ToggleUserResponse, TokenResponse, TriggerLog, UserProfile,
    WebhookRequest, WebhookResponse,
};
use crate::config::DashboardConfig;

fn toggle_user_endpoint(user_id: &str) -> String {
    format!("/auth/users/{user_id}/toggle")
}

fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Pull a human-readable message out of an error body.
///
/// The backend answers errors with `{"detail": "..."}`; validation errors
/// carry a list instead, in which case the status fallback is used.
fn error_message(resp: &ApiResponse) -> String {
    serde_json::from_str::<serde_json::Value>(&resp.body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .or_else(|| value.get("message"))
                .and_then(serde_json::Value::as_str)
                .map(ToOwned::to_owned)
        })
        .filter(|msg| !msg.trim().is_empty())
        .unwrap_or_else(|| request_failed_message(resp.status))
}

fn decode<T: DeserializeOwned>(resp: &ApiResponse) -> Result<T, ApiError> {
    if !resp.is_success() {
        return Err(ApiError::Status { status: resp.status, message: error_message(resp) });
    }
    serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn to_body<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// REST client over any [`Transport`].
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    transport: T,
}

impl ApiClient<HttpTransport> {
    /// Browser client for the configured API base URL.
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(HttpTransport::new(config.api_base_url.clone()))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    async fn call<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let resp = self.transport.send(request).await?;
        decode(&resp)
    }

    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or credentials are refused.
    pub async fn login(&self, body: &LoginRequest) -> Result<TokenResponse, ApiError> {
        self.call(ApiRequest::post("/auth/login", to_body(body)?)).await
    }

    /// `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the account is refused.
    pub async fn register(&self, body: &RegisterRequest) -> Result<TokenResponse, ApiError> {
        self.call(ApiRequest::post("/auth/register", to_body(body)?)).await
    }

    /// `GET /auth/me` for the given bearer token.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the token is rejected or the profile is malformed.
    pub async fn me(&self, token: &str) -> Result<UserProfile, ApiError> {
        self.call(ApiRequest::get("/auth/me").with_bearer(Some(token))).await
    }

    /// `GET /auth/users`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the caller is not an admin.
    pub async fn list_users(&self, token: Option<&str>) -> Result<Vec<UserProfile>, ApiError> {
        self.call(ApiRequest::get("/auth/users").with_bearer(token)).await
    }

    /// `PUT /auth/users/{id}/toggle`, requesting the given active state.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or is refused.
    pub async fn toggle_user(
        &self,
        token: Option<&str>,
        user_id: &str,
        is_active: bool,
    ) -> Result<ToggleUserResponse, ApiError> {
        let body = to_body(&ToggleUserRequest { is_active })?;
        self.call(ApiRequest::put(toggle_user_endpoint(user_id), body).with_bearer(token)).await
    }

    /// `GET /webhook/logs`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or any entry is malformed.
    pub async fn fetch_logs(&self, token: Option<&str>) -> Result<Vec<TriggerLog>, ApiError> {
        self.call(ApiRequest::get("/webhook/logs").with_bearer(token)).await
    }

    /// `POST /webhook/`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the response is malformed.
    pub async fn submit_webhook(&self, body: &WebhookRequest) -> Result<WebhookResponse, ApiError> {
        self.call(ApiRequest::post("/webhook/", to_body(body)?)).await
    }
}
