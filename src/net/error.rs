//! Error taxonomy for REST calls and authentication flows.
//!
//! ERROR HANDLING
//! ==============
//! `ApiError` is the transport-level failure for any endpoint. Auth flows
//! narrow it into `AuthError`, whose `Display` text is shown verbatim in the
//! login form, so server-provided `detail` messages pass through unchanged.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Status { status: u16, message: String },
    /// The response body did not match the expected schema.
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// Failure of login, registration, or identity lookup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Credentials or registration data were refused by the server.
    #[error("{0}")]
    Rejected(String),
    /// A token was issued but resolving it to a profile failed.
    #[error("Failed to get user details: {0}")]
    IdentityLookup(String),
    #[error("Unable to reach the server: {0}")]
    Network(String),
    #[error("Unexpected server response: {0}")]
    Decode(String),
    /// The session could not be written to durable storage.
    #[error("Could not save session: {0}")]
    Storage(String),
    /// The in-memory session refused the login, e.g. before restore finished.
    #[error("Session not ready: {0}")]
    Session(String),
}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Network(msg) => Self::Network(msg),
            ApiError::Status { message, .. } => Self::Rejected(message),
            ApiError::Decode(msg) => Self::Decode(msg),
        }
    }
}

impl AuthError {
    /// Wrap a failure of the `/auth/me` follow-up call.
    pub fn identity_lookup(err: &ApiError) -> Self {
        let detail = match err {
            ApiError::Status { message, .. } => message.clone(),
            ApiError::Network(msg) | ApiError::Decode(msg) => msg.clone(),
        };
        Self::IdentityLookup(detail)
    }
}
