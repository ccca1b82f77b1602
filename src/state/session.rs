//! Auth-session state machine for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards and identity-aware components read a [`SessionView`] derived
//! from this state. `SessionContext` owns the only writer.
//!
//! DESIGN
//! ======
//! The credential and the profile live together in one [`Session`], held as
//! `Option<Session>`, so a token without an identity (or the reverse) cannot
//! be represented. Phase transitions are checked; an illegal transition is
//! rejected and leaves the state untouched.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::error::AuthError;
use crate::net::types::UserProfile;
use crate::util::guard::{AppRoute, role_home};

/// An authenticated identity and its bearer credential.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

/// Result of a committed login or registration.
///
/// Callers match on this to decide where to navigate; the session layer
/// itself knows nothing about routing beyond naming the role's home.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthOutcome {
    pub user: UserProfile,
    pub home: AppRoute,
}

impl AuthOutcome {
    pub fn for_user(user: UserProfile) -> Self {
        let home = role_home(user.is_admin());
        Self { user, home }
    }
}

/// Lifecycle phase of the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// Nothing read from storage yet.
    #[default]
    Init,
    /// Reading the persisted session.
    Restoring,
    Authenticated,
    Anonymous,
}

/// Rejected phase transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("illegal session transition {action} from {from:?}")]
pub struct SessionTransitionError {
    pub from: SessionPhase,
    pub action: &'static str,
}

/// Snapshot of the fields guards decide on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionView {
    pub loading: bool,
    pub is_authenticated: bool,
    pub is_admin: bool,
}

/// Session phase plus the current session, if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    phase: SessionPhase,
    session: Option<Session>,
}

impl From<SessionTransitionError> for AuthError {
    fn from(err: SessionTransitionError) -> Self {
        Self::Session(err.to_string())
    }
}

impl SessionState {
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.session.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.token.as_str())
    }

    /// True only until the persisted session has been read.
    pub fn loading(&self) -> bool {
        matches!(self.phase, SessionPhase::Init | SessionPhase::Restoring)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(UserProfile::is_admin)
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            loading: self.loading(),
            is_authenticated: self.is_authenticated(),
            is_admin: self.is_admin(),
        }
    }

    fn reject(&self, action: &'static str) -> SessionTransitionError {
        SessionTransitionError { from: self.phase, action }
    }

    /// `Init -> Restoring`.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionTransitionError`] from any other phase.
    pub fn begin_restore(&mut self) -> Result<(), SessionTransitionError> {
        if self.phase != SessionPhase::Init {
            return Err(self.reject("begin_restore"));
        }
        self.phase = SessionPhase::Restoring;
        Ok(())
    }

    /// `Restoring -> Authenticated | Anonymous`, depending on what storage held.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionTransitionError`] unless currently restoring.
    pub fn finish_restore(&mut self, restored: Option<Session>) -> Result<(), SessionTransitionError> {
        if self.phase != SessionPhase::Restoring {
            return Err(self.reject("finish_restore"));
        }
        self.phase = if restored.is_some() { SessionPhase::Authenticated } else { SessionPhase::Anonymous };
        self.session = restored;
        Ok(())
    }

    /// `Anonymous -> Authenticated` after a committed login or registration.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionTransitionError`] unless currently anonymous.
    pub fn authenticate(&mut self, session: Session) -> Result<(), SessionTransitionError> {
        if self.phase != SessionPhase::Anonymous {
            return Err(self.reject("authenticate"));
        }
        self.phase = SessionPhase::Authenticated;
        self.session = Some(session);
        Ok(())
    }

    /// Apply a session the gateway has just persisted.
    ///
    /// When an earlier overlapping login already authenticated, the state
    /// signs out first so the newest committed session wins and memory keeps
    /// matching storage.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionTransitionError`] while the session is still loading.
    pub fn commit_login(&mut self, session: Session) -> Result<(), SessionTransitionError> {
        if self.phase == SessionPhase::Authenticated {
            self.sign_out()?;
        }
        self.authenticate(session)
    }

    /// `Authenticated -> Anonymous`. Signing out while already anonymous is a no-op.
    ///
    /// # Errors
    ///
    /// Returns a [`SessionTransitionError`] while the session is still loading.
    pub fn sign_out(&mut self) -> Result<(), SessionTransitionError> {
        match self.phase {
            SessionPhase::Authenticated | SessionPhase::Anonymous => {
                self.phase = SessionPhase::Anonymous;
                self.session = None;
                Ok(())
            }
            SessionPhase::Init | SessionPhase::Restoring => Err(self.reject("sign_out")),
        }
    }
}
