use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_deserializes_from_lowercase() {
    assert_eq!(serde_json::from_str::<Role>("\"admin\"").unwrap(), Role::Admin);
    assert_eq!(serde_json::from_str::<Role>("\"user\"").unwrap(), Role::User);
}

#[test]
fn role_rejects_unknown_value() {
    assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
}

#[test]
fn role_as_str_matches_wire_name() {
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(Role::User.as_str(), "user");
}

// =============================================================
// UserProfile
// =============================================================

#[test]
fn user_profile_from_me_endpoint_falls_back_to_username() {
    let json = r#"{
        "username": "omar@tech.com",
        "email": "omar@tech.com",
        "role": "admin",
        "full_name": "Omar"
    }"#;
    let user: UserProfile = serde_json::from_str(json).unwrap();
    assert_eq!(user.key(), "omar@tech.com");
    assert!(user.is_admin());
    assert!(user.is_active);
    assert_eq!(user.display_name(), "Omar");
}

#[test]
fn user_profile_from_users_endpoint_prefers_id() {
    let json = r#"{
        "id": "u-7",
        "username": "jane",
        "email": "jane@example.com",
        "full_name": null,
        "role": "user",
        "is_active": false
    }"#;
    let user: UserProfile = serde_json::from_str(json).unwrap();
    assert_eq!(user.key(), "u-7");
    assert!(!user.is_active);
    assert_eq!(user.full_name, "");
    assert_eq!(user.display_name(), "jane@example.com");
}

#[test]
fn user_profile_with_unknown_role_fails_to_decode() {
    let json = r#"{"username": "x", "email": "x@y.z", "role": "root"}"#;
    assert!(serde_json::from_str::<UserProfile>(json).is_err());
}

#[test]
fn user_profile_requires_email() {
    let json = r#"{"username": "x", "role": "user"}"#;
    assert!(serde_json::from_str::<UserProfile>(json).is_err());
}

// =============================================================
// Requests
// =============================================================

#[test]
fn register_request_serializes_role_lowercase() {
    let req = RegisterRequest {
        username: "a@b.com".to_owned(),
        email: "a@b.com".to_owned(),
        password: "pw".to_owned(),
        full_name: "A".to_owned(),
        role: Role::User,
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["role"], "user");
    assert_eq!(value["username"], "a@b.com");
}

#[test]
fn token_response_ignores_extra_fields() {
    let json = r#"{"access_token": "t-1", "token_type": "bearer", "username": "a", "role": "user"}"#;
    let token: TokenResponse = serde_json::from_str(json).unwrap();
    assert_eq!(token.access_token, "t-1");
    assert_eq!(token.token_type.as_deref(), Some("bearer"));
}

#[test]
fn token_response_requires_access_token() {
    assert!(serde_json::from_str::<TokenResponse>(r#"{"token_type": "bearer"}"#).is_err());
}

// =============================================================
// TriggerLog
// =============================================================

#[test]
fn trigger_log_decodes_server_entry() {
    let json = r#"{
        "id": "3",
        "timestamp": "2025-03-04T10:15:30.123456",
        "user_id": "u",
        "session_id": "s",
        "message": "Hi, I am Omar from Tech",
        "extracted": {"name": "Omar", "email": null, "company": "Tech"},
        "save_status": "no_contact_info",
        "retry_info": {"has_retries": false}
    }"#;
    let log: TriggerLog = serde_json::from_str(json).unwrap();
    assert_eq!(log.save_status, SaveStatus::NoContactInfo);
    assert_eq!(log.extracted.name, "Omar");
    assert_eq!(log.extracted.email, "");
    assert_eq!(log.date(), Some("2025-03-04"));
    assert_eq!(log.time(), Some("10:15:30"));
}

#[test]
fn trigger_log_rejects_unknown_save_status() {
    let json = r#"{"id": "1", "timestamp": "t", "message": "m", "save_status": "pending"}"#;
    assert!(serde_json::from_str::<TriggerLog>(json).is_err());
}

#[test]
fn trigger_log_short_timestamp_has_no_date() {
    let json = r#"{"id": "1", "timestamp": "today", "message": "m", "save_status": "success"}"#;
    let log: TriggerLog = serde_json::from_str(json).unwrap();
    assert_eq!(log.date(), None);
    assert_eq!(log.extracted, ExtractedLead::default());
}

#[test]
fn webhook_response_decodes_optional_message() {
    let resp: WebhookResponse = serde_json::from_str(r#"{"save_status": "failure", "message": "CRM down"}"#).unwrap();
    assert_eq!(resp.save_status, SaveStatus::Failure);
    assert_eq!(resp.message.as_deref(), Some("CRM down"));
}
