//! Wire-schema DTOs for the lead-extraction REST API.
//!
//! DESIGN
//! ======
//! Every response body is decoded into one of these types at the network
//! boundary. Fields the dashboard never reads are ignored rather than
//! modelled, and optional server fields get explicit serde defaults so a
//! missing value never reaches the UI as a panic.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role assigned by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Standard dashboard user.
    #[default]
    User,
    /// Administrator with access to user management.
    Admin,
}

impl Role {
    /// Lowercase wire name, also used as a CSS modifier.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

/// A user profile as returned by `/auth/me` and `/auth/users`.
///
/// `/auth/me` omits `id` and `is_active`; the id falls back to the username
/// (the backend keys accounts by username) and accounts default to active.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub full_name: String,
    pub role: Role,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

impl UserProfile {
    /// Stable identifier used in `/auth/users/{id}` paths.
    pub fn key(&self) -> &str {
        if self.id.is_empty() { &self.username } else { &self.id }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Name shown in headers, falling back to the email address.
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() { &self.email } else { &self.full_name }
    }
}

fn default_active() -> bool {
    true
}

fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// `POST /auth/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/register` body. The backend keys accounts by `username`,
/// which the dashboard always sets to the email address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub role: Role,
}

/// Token issued by login and registration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
}

/// `PUT /auth/users/{id}/toggle` body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ToggleUserRequest {
    pub is_active: bool,
}

/// Response to a user status toggle.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ToggleUserResponse {
    #[serde(default)]
    pub user_id: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Outcome of persisting an extracted lead to the CRM.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveStatus {
    Success,
    Failure,
    NoContactInfo,
}

impl SaveStatus {
    /// Human-readable badge label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Failure => "Failed",
            Self::NoContactInfo => "No contact info",
        }
    }

    /// CSS modifier for status badges.
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
            Self::NoContactInfo => "no-contact",
        }
    }
}

/// Lead fields extracted from a webhook message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedLead {
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub company: String,
}

/// One webhook trigger log entry from `GET /webhook/logs`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerLog {
    pub id: String,
    /// ISO 8601 timestamp as produced by the server.
    pub timestamp: String,
    pub message: String,
    #[serde(default)]
    pub extracted: ExtractedLead,
    pub save_status: SaveStatus,
}

impl TriggerLog {
    /// `YYYY-MM-DD` prefix of the timestamp, if it has one.
    pub fn date(&self) -> Option<&str> {
        self.timestamp.get(..10)
    }

    /// `HH:MM:SS` portion of the timestamp, if it has one.
    pub fn time(&self) -> Option<&str> {
        self.timestamp.get(11..19)
    }
}

/// `POST /webhook/` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WebhookRequest {
    pub message: String,
    pub user_id: String,
    pub session_id: String,
}

/// Response to a webhook submission.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct WebhookResponse {
    pub save_status: SaveStatus,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub extracted: Option<ExtractedLead>,
}
