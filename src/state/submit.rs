//! "Create New Lead" form state.
//!
//! DESIGN
//! ======
//! The form posts free text to the webhook and the backend extracts the
//! lead. Only the trimmed message is sent; the outcome is folded into a
//! single optional banner message. A response (of any status) clears the
//! draft, a transport failure keeps it so the user can retry and shows the
//! failure's own message.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use uuid::Uuid;

use crate::net::error::ApiError;
use crate::net::types::{SaveStatus, UserProfile, WebhookRequest, WebhookResponse};

/// Webhook attribution for submissions made without a known user.
pub const DEFAULT_USER_ID: &str = "default_user";
pub const PROCESS_FAILED_MESSAGE: &str = "Failed to process message";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a message")]
    EmptyMessage,
    #[error("No contact information found. Please include a name, email, or company in your message.")]
    NoContactInfo,
    #[error("{0}")]
    Rejected(String),
}

/// Trim the draft, rejecting whitespace-only input.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyMessage`] when nothing is left after trimming.
pub fn validate_message(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyMessage);
    }
    Ok(trimmed.to_owned())
}

/// Map the webhook outcome onto success or a user-facing error.
///
/// # Errors
///
/// `NoContactInfo` for messages without extractable contact data, and
/// `Rejected` with the backend's message (or a generic one) on failure.
pub fn interpret_response(response: &WebhookResponse) -> Result<SaveStatus, ValidationError> {
    match response.save_status {
        SaveStatus::Success => Ok(SaveStatus::Success),
        SaveStatus::NoContactInfo => Err(ValidationError::NoContactInfo),
        SaveStatus::Failure => Err(ValidationError::Rejected(
            response
                .message
                .as_deref()
                .filter(|m| !m.is_empty())
                .unwrap_or(PROCESS_FAILED_MESSAGE)
                .to_owned(),
        )),
    }
}

pub fn new_session_id() -> String {
    format!("session-{}", Uuid::new_v4())
}

pub fn webhook_user_id(user: Option<&UserProfile>) -> String {
    user.map(|u| u.email.trim())
        .filter(|email| !email.is_empty())
        .unwrap_or(DEFAULT_USER_ID)
        .to_owned()
}

/// Build the webhook payload for a validated message.
pub fn build_request(message: String, user: Option<&UserProfile>) -> WebhookRequest {
    WebhookRequest { message, user_id: webhook_user_id(user), session_id: new_session_id() }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitState {
    pub draft: String,
    pub submitting: bool,
    pub error: Option<String>,
}

impl SubmitState {
    /// Whether the submit button should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.draft.trim().is_empty()
    }

    /// Validate the draft and build the request, entering the submitting state.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyMessage`] and shows it in the banner.
    /// Refuses while a submission is already in flight, leaving the banner as is.
    pub fn begin(&mut self, user: Option<&UserProfile>) -> Result<WebhookRequest, ValidationError> {
        if self.submitting {
            return Err(ValidationError::Rejected("Submission already in progress".to_owned()));
        }
        let message = validate_message(&self.draft).inspect_err(|e| self.error = Some(e.to_string()))?;
        self.submitting = true;
        self.error = None;
        Ok(build_request(message, user))
    }

    /// Record the outcome. Returns true when the log list should be refreshed.
    pub fn finish(&mut self, result: Result<WebhookResponse, ApiError>) -> bool {
        self.submitting = false;
        match result {
            Ok(response) => {
                match interpret_response(&response) {
                    Ok(_) => {
                        log::info!("lead extracted: {:?}", response.extracted);
                        self.error = None;
                    }
                    Err(e) => self.error = Some(e.to_string()),
                }
                self.draft.clear();
                true
            }
            Err(e) => {
                log::warn!("webhook submission failed: {e}");
                self.error = Some(e.to_string());
                false
            }
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }
}
