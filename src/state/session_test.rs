use super::*;
use crate::net::types::Role;

fn user(role: Role) -> UserProfile {
    UserProfile {
        id: "u-1".to_owned(),
        username: "alice@example.com".to_owned(),
        email: "alice@example.com".to_owned(),
        full_name: "Alice".to_owned(),
        role,
        is_active: true,
    }
}

fn session(role: Role) -> Session {
    Session { token: "t-1".to_owned(), user: user(role) }
}

fn anonymous() -> SessionState {
    let mut state = SessionState::default();
    state.begin_restore().unwrap();
    state.finish_restore(None).unwrap();
    state
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_init_and_loading() {
    let state = SessionState::default();
    assert_eq!(state.phase(), SessionPhase::Init);
    assert!(state.loading());
    assert!(!state.is_authenticated());
    assert!(state.user().is_none());
    assert!(state.token().is_none());
}

// =============================================================
// Restore
// =============================================================

#[test]
fn restore_with_session_authenticates() {
    let mut state = SessionState::default();
    state.begin_restore().unwrap();
    assert!(state.loading());
    state.finish_restore(Some(session(Role::User))).unwrap();

    assert_eq!(state.phase(), SessionPhase::Authenticated);
    assert!(!state.loading());
    assert!(state.is_authenticated());
    assert_eq!(state.token(), Some("t-1"));
}

#[test]
fn restore_without_session_is_anonymous() {
    let state = anonymous();
    assert_eq!(state.phase(), SessionPhase::Anonymous);
    assert!(!state.loading());
    assert!(!state.is_authenticated());
}

#[test]
fn begin_restore_twice_is_rejected() {
    let mut state = SessionState::default();
    state.begin_restore().unwrap();
    let err = state.begin_restore().unwrap_err();
    assert_eq!(err.from, SessionPhase::Restoring);
    assert_eq!(state.phase(), SessionPhase::Restoring);
}

#[test]
fn finish_restore_without_begin_is_rejected() {
    let mut state = SessionState::default();
    assert!(state.finish_restore(Some(session(Role::User))).is_err());
    assert!(state.session().is_none());
}

// =============================================================
// Login / logout
// =============================================================

#[test]
fn authenticate_from_anonymous_sets_session() {
    let mut state = anonymous();
    state.authenticate(session(Role::Admin)).unwrap();
    assert!(state.is_authenticated());
    assert!(state.is_admin());
}

#[test]
fn authenticate_while_loading_is_rejected() {
    let mut state = SessionState::default();
    assert!(state.authenticate(session(Role::User)).is_err());
    assert_eq!(state, SessionState::default());
}

#[test]
fn authenticate_when_already_authenticated_is_rejected() {
    let mut state = anonymous();
    state.authenticate(session(Role::User)).unwrap();
    let before = state.clone();
    assert!(state.authenticate(session(Role::Admin)).is_err());
    assert_eq!(state, before);
}

#[test]
fn sign_out_clears_token_and_user_together() {
    let mut state = anonymous();
    state.authenticate(session(Role::User)).unwrap();
    state.sign_out().unwrap();
    assert_eq!(state.phase(), SessionPhase::Anonymous);
    assert!(state.user().is_none());
    assert!(state.token().is_none());
}

#[test]
fn sign_out_is_idempotent() {
    let mut state = anonymous();
    state.sign_out().unwrap();
    state.sign_out().unwrap();
    assert_eq!(state.phase(), SessionPhase::Anonymous);
}

#[test]
fn sign_out_while_loading_is_rejected() {
    let mut state = SessionState::default();
    assert!(state.sign_out().is_err());
}

// =============================================================
// Derived view
// =============================================================

#[test]
fn view_reflects_role() {
    let mut state = anonymous();
    assert_eq!(state.view(), SessionView { loading: false, is_authenticated: false, is_admin: false });
    state.authenticate(session(Role::User)).unwrap();
    assert_eq!(state.view(), SessionView { loading: false, is_authenticated: true, is_admin: false });
}

#[test]
fn authenticated_iff_token_and_user_present() {
    let mut state = anonymous();
    for step in 0..4 {
        if step % 2 == 0 {
            state.authenticate(session(Role::User)).unwrap();
        } else {
            state.sign_out().unwrap();
        }
        assert_eq!(state.is_authenticated(), state.token().is_some());
        assert_eq!(state.token().is_some(), state.user().is_some());
    }
}

// =============================================================
// Commit / outcome
// =============================================================

#[test]
fn commit_login_replaces_earlier_session() {
    let mut state = anonymous();
    state.commit_login(session(Role::User)).unwrap();
    let newer = Session { token: "t-2".to_owned(), user: user(Role::Admin) };
    state.commit_login(newer.clone()).unwrap();
    assert_eq!(state.session(), Some(&newer));
    assert_eq!(state.phase(), SessionPhase::Authenticated);
}

#[test]
fn commit_login_while_loading_is_rejected() {
    let mut state = SessionState::default();
    assert!(state.commit_login(session(Role::User)).is_err());
    assert!(!state.is_authenticated());
}

#[test]
fn auth_outcome_for_admin_targets_admin_home() {
    let outcome = AuthOutcome::for_user(user(Role::Admin));
    assert_eq!(outcome.home, AppRoute::Admin);
    assert_eq!(outcome.user.role, Role::Admin);
}

#[test]
fn auth_outcome_for_user_targets_dashboard() {
    assert_eq!(AuthOutcome::for_user(user(Role::User)).home, AppRoute::Dashboard);
}

#[test]
fn transition_error_becomes_auth_error() {
    let err = AuthError::from(SessionTransitionError { from: SessionPhase::Init, action: "authenticate" });
    assert_eq!(err, AuthError::Session("illegal session transition authenticate from Init".to_owned()));
}
