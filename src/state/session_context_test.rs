use futures::executor::block_on;
use leptos::prelude::Owner;
use serde_json::json;

use super::*;
use crate::net::testing::ScriptedTransport;
use crate::net::types::Role;
use crate::util::guard::AppRoute;
use crate::util::session_storage::{MemoryStorage, TOKEN_KEY, USER_KEY};

type TestContext = SessionContext<ScriptedTransport, MemoryStorage>;

fn context() -> (TestContext, ScriptedTransport, MemoryStorage) {
    let transport = ScriptedTransport::new();
    let storage = MemoryStorage::new();
    let gateway = AuthGateway::new(ApiClient::new(transport.clone()), SessionStore::new(storage.clone()));
    (SessionContext::new(gateway), transport, storage)
}

fn admin_profile() -> serde_json::Value {
    json!({"username": "root@corp.com", "email": "root@corp.com", "full_name": "Root", "role": "admin"})
}

fn user_profile() -> serde_json::Value {
    json!({"username": "ann@corp.com", "email": "ann@corp.com", "full_name": "Ann", "role": "user"})
}

fn persisted_user() -> Session {
    Session {
        token: "t-saved".to_owned(),
        user: UserProfile {
            id: "ann".to_owned(),
            username: "ann@corp.com".to_owned(),
            email: "ann@corp.com".to_owned(),
            full_name: "Ann".to_owned(),
            role: Role::User,
            is_active: true,
        },
    }
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_with_empty_storage_is_anonymous() {
    Owner::new().with(|| {
        let (ctx, _, _) = context();
        assert!(ctx.view().loading);

        ctx.restore();

        let view = ctx.view();
        assert!(!view.loading);
        assert!(!view.is_authenticated);
        assert!(ctx.user_untracked().is_none());
    });
}

#[test]
fn restore_reads_persisted_session_once() {
    Owner::new().with(|| {
        let (ctx, _, storage) = context();
        SessionStore::new(storage.clone()).save(&persisted_user()).unwrap();

        ctx.restore();
        assert!(ctx.view().is_authenticated);
        assert!(!ctx.is_admin());
        assert_eq!(ctx.token_untracked().as_deref(), Some("t-saved"));

        storage.remove(TOKEN_KEY);
        ctx.restore();
        assert_eq!(ctx.user_untracked(), Some(persisted_user().user));
    });
}

// =============================================================
// login / register
// =============================================================

#[test]
fn admin_login_authenticates_and_names_admin_home() {
    Owner::new().with(|| {
        let (ctx, transport, storage) = context();
        ctx.restore();
        transport.respond(200, json!({"access_token": "t-admin"})).respond(200, admin_profile());

        let outcome = block_on(ctx.login("root@corp.com".to_owned(), "pw".to_owned())).unwrap();

        assert_eq!(outcome.user.role, Role::Admin);
        assert_eq!(outcome.home, AppRoute::Admin);
        assert!(ctx.view().is_authenticated);
        assert!(ctx.is_admin());
        assert_eq!(ctx.token_untracked().as_deref(), Some("t-admin"));
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("t-admin"));
    });
}

#[test]
fn refused_login_stays_anonymous() {
    Owner::new().with(|| {
        let (ctx, transport, storage) = context();
        ctx.restore();
        transport.respond(401, json!({"detail": "Incorrect email or password"}));

        let err = block_on(ctx.login("root@corp.com".to_owned(), "wrong".to_owned())).unwrap_err();

        assert_eq!(err, AuthError::Rejected("Incorrect email or password".to_owned()));
        let view = ctx.view();
        assert!(!view.loading);
        assert!(!view.is_authenticated);
        assert!(storage.snapshot().is_empty());
    });
}

#[test]
fn login_before_restore_returns_session_error() {
    Owner::new().with(|| {
        let (ctx, transport, _) = context();
        transport.respond(200, json!({"access_token": "t-early"})).respond(200, user_profile());

        let err = block_on(ctx.login("ann@corp.com".to_owned(), "pw".to_owned())).unwrap_err();

        assert!(matches!(err, AuthError::Session(_)));
        assert!(ctx.view().loading);
        assert!(ctx.user_untracked().is_none());
    });
}

#[test]
fn register_commits_user_session() {
    Owner::new().with(|| {
        let (ctx, transport, _) = context();
        ctx.restore();
        transport.respond(200, json!({"access_token": "t-new"})).respond(200, user_profile());

        let outcome = block_on(ctx.register(RegisterForm::new("ann@corp.com", "pw", "Ann"))).unwrap();

        assert_eq!(outcome.home, AppRoute::Dashboard);
        assert!(ctx.view().is_authenticated);
        assert!(!ctx.is_admin());
        assert_eq!(ctx.user_untracked().map(|u| u.email).as_deref(), Some("ann@corp.com"));
        assert_eq!(transport.requests()[0].path, "/auth/register");
    });
}

#[test]
fn second_login_replaces_first() {
    Owner::new().with(|| {
        let (ctx, transport, storage) = context();
        ctx.restore();
        transport
            .respond(200, json!({"access_token": "t-ann"}))
            .respond(200, user_profile())
            .respond(200, json!({"access_token": "t-admin"}))
            .respond(200, admin_profile());

        block_on(ctx.login("ann@corp.com".to_owned(), "pw".to_owned())).unwrap();
        block_on(ctx.login("root@corp.com".to_owned(), "pw".to_owned())).unwrap();

        assert!(ctx.is_admin());
        assert_eq!(ctx.token_untracked().as_deref(), Some("t-admin"));
        assert_eq!(storage.get(TOKEN_KEY).as_deref(), Some("t-admin"));
    });
}

// =============================================================
// logout
// =============================================================

#[test]
fn logout_clears_memory_and_storage() {
    Owner::new().with(|| {
        let (ctx, _, storage) = context();
        SessionStore::new(storage.clone()).save(&persisted_user()).unwrap();
        ctx.restore();

        ctx.logout();

        assert!(!ctx.view().is_authenticated);
        assert!(ctx.token_untracked().is_none());
        assert!(storage.get(TOKEN_KEY).is_none());
        assert!(storage.get(USER_KEY).is_none());
    });
}
