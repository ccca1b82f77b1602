use futures::executor::block_on;
use serde_json::json;

use super::*;
use crate::net::testing::ScriptedTransport;
use crate::net::transport::Method;
use crate::util::session_storage::{MemoryStorage, TOKEN_KEY, USER_KEY};

fn gateway() -> (AuthGateway<ScriptedTransport, MemoryStorage>, ScriptedTransport, MemoryStorage) {
    let transport = ScriptedTransport::new();
    let storage = MemoryStorage::new();
    let gateway = AuthGateway::new(ApiClient::new(transport.clone()), SessionStore::new(storage.clone()));
    (gateway, transport, storage)
}

fn admin_profile() -> serde_json::Value {
    json!({"username": "root@corp.com", "email": "root@corp.com", "full_name": "Root", "role": "admin"})
}

fn user_profile() -> serde_json::Value {
    json!({"username": "ann@corp.com", "email": "ann@corp.com", "full_name": "Ann", "role": "user"})
}

// =============================================================
// login
// =============================================================

#[test]
fn login_commits_session_after_identity_lookup() {
    let (gateway, transport, storage) = gateway();
    transport
        .respond(200, json!({"access_token": "t-admin", "token_type": "bearer"}))
        .respond(200, admin_profile());

    let session = block_on(gateway.login("root@corp.com", "pw")).unwrap();

    assert_eq!(session.token, "t-admin");
    assert_eq!(session.user.role, Role::Admin);
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("t-admin"));
    assert_eq!(gateway.restore(), Some(session));

    let sent = transport.requests();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].path, "/auth/login");
    assert_eq!(sent[1].method, Method::Get);
    assert_eq!(sent[1].path, "/auth/me");
    assert_eq!(sent[1].bearer.as_deref(), Some("t-admin"));
}

#[test]
fn login_trims_email() {
    let (gateway, transport, _) = gateway();
    transport.respond(200, json!({"access_token": "t"})).respond(200, user_profile());

    block_on(gateway.login("  ann@corp.com ", "pw")).unwrap();

    assert_eq!(transport.requests()[0].body.as_ref().unwrap()["email"], "ann@corp.com");
}

#[test]
fn rejected_credentials_surface_server_message_and_persist_nothing() {
    let (gateway, transport, storage) = gateway();
    transport.respond(401, json!({"detail": "Incorrect email or password"}));

    let err = block_on(gateway.login("ann@corp.com", "wrong")).unwrap_err();

    assert_eq!(err, AuthError::Rejected("Incorrect email or password".to_owned()));
    assert_eq!(err.to_string(), "Incorrect email or password");
    assert!(storage.snapshot().is_empty());
    assert_eq!(transport.requests().len(), 1);
}

#[test]
fn identity_lookup_failure_leaves_no_token_behind() {
    let (gateway, transport, storage) = gateway();
    transport
        .respond(200, json!({"access_token": "t-orphan"}))
        .respond(401, json!({"detail": "Could not validate credentials"}));

    let err = block_on(gateway.login("ann@corp.com", "pw")).unwrap_err();

    assert!(matches!(err, AuthError::IdentityLookup(_)));
    assert!(storage.get(TOKEN_KEY).is_none());
    assert!(storage.get(USER_KEY).is_none());
}

#[test]
fn failed_login_keeps_prior_persisted_values_identical() {
    let (gateway, transport, storage) = gateway();
    transport.respond(200, json!({"access_token": "t-1"})).respond(200, user_profile());
    block_on(gateway.login("ann@corp.com", "pw")).unwrap();
    let before = storage.snapshot();

    transport.respond(200, json!({"access_token": "t-2"})).fail("connection reset");
    assert!(block_on(gateway.login("root@corp.com", "pw")).is_err());

    assert_eq!(storage.snapshot(), before);
}

#[test]
fn malformed_profile_is_identity_lookup_error() {
    let (gateway, transport, storage) = gateway();
    transport
        .respond(200, json!({"access_token": "t"}))
        .respond(200, json!({"username": "x", "email": "x@y.z", "role": "owner"}));

    let err = block_on(gateway.login("x@y.z", "pw")).unwrap_err();

    assert!(matches!(err, AuthError::IdentityLookup(_)));
    assert!(storage.snapshot().is_empty());
}

#[test]
fn empty_access_token_is_rejected_before_lookup() {
    let (gateway, transport, _) = gateway();
    transport.respond(200, json!({"access_token": ""}));

    let err = block_on(gateway.login("x@y.z", "pw")).unwrap_err();

    assert!(matches!(err, AuthError::Decode(_)));
    assert_eq!(transport.requests().len(), 1);
}

#[test]
fn network_failure_is_network_error() {
    let (gateway, transport, _) = gateway();
    transport.fail("offline");

    let err = block_on(gateway.login("x@y.z", "pw")).unwrap_err();

    assert_eq!(err, AuthError::Network("offline".to_owned()));
}

#[test]
fn storage_failure_is_reported_and_nothing_persisted() {
    let (gateway, transport, storage) = gateway();
    storage.set_read_only(true);
    transport.respond(200, json!({"access_token": "t"})).respond(200, user_profile());

    let err = block_on(gateway.login("ann@corp.com", "pw")).unwrap_err();

    assert!(matches!(err, AuthError::Storage(_)));
    assert!(storage.snapshot().is_empty());
}

// =============================================================
// register
// =============================================================

#[test]
fn register_uses_email_as_username_and_defaults_to_user_role() {
    let (gateway, transport, storage) = gateway();
    transport.respond(200, json!({"access_token": "t-new"})).respond(200, user_profile());

    let session = block_on(gateway.register(RegisterForm::new("ann@corp.com", "pw", "Ann"))).unwrap();

    assert_eq!(session.user.role, Role::User);
    let body = transport.requests()[0].body.clone().unwrap();
    assert_eq!(
        body,
        json!({"username": "ann@corp.com", "email": "ann@corp.com", "password": "pw", "full_name": "Ann", "role": "user"})
    );
    assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("t-new"));
}

#[test]
fn duplicate_registration_surfaces_detail() {
    let (gateway, transport, storage) = gateway();
    transport.respond(400, json!({"detail": "Email already registered"}));

    let err = block_on(gateway.register(RegisterForm::new("ann@corp.com", "pw", "Ann"))).unwrap_err();

    assert_eq!(err.to_string(), "Email already registered");
    assert!(storage.snapshot().is_empty());
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_session_and_is_idempotent() {
    let (gateway, transport, storage) = gateway();
    transport.respond(200, json!({"access_token": "t"})).respond(200, user_profile());
    block_on(gateway.login("ann@corp.com", "pw")).unwrap();

    gateway.logout();
    assert!(storage.snapshot().is_empty());
    assert!(gateway.restore().is_none());

    gateway.logout();
    assert!(storage.snapshot().is_empty());
}
