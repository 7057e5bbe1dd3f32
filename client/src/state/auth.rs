//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`AuthSession`] is the authentication subsystem: it owns the single
//! [`AuthWriter`] and is the only code that flips the shared flag. Gates read
//! the flag through [`AuthSession::reader`]; components render from the
//! [`SessionState`] signal.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use authgate::{AuthState, AuthWriter, SignOutReason};
use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::net::types::User;

/// Renderable view of the session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    /// True until the initial `/user` probe settles.
    pub loading: bool,
}

/// Context value shared through the component tree.
#[derive(Clone)]
pub struct AuthSession {
    writer: Arc<AuthWriter>,
    pub session: RwSignal<SessionState>,
}

impl AuthSession {
    /// A signed-out session waiting for its bootstrap probe.
    #[must_use]
    pub fn new() -> Self {
        let (_, writer) = AuthState::new();
        Self {
            writer: Arc::new(writer),
            session: RwSignal::new(SessionState { user: None, loading: true }),
        }
    }

    /// Read-only handle for gates and other observers.
    #[must_use]
    pub fn reader(&self) -> AuthState {
        self.writer.reader()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.writer.reader().is_authenticated()
    }

    /// Record a successful credential exchange.
    ///
    /// The session signal is updated before the flag flips so deferred
    /// actions fired by the transition already see the user.
    pub fn signed_in(&self, user: User) {
        self.session.set(SessionState { user: Some(user), loading: false });
        self.writer.sign_in();
    }

    /// Record the end of the session.
    pub fn signed_out(&self, reason: SignOutReason) {
        self.session.set(SessionState { user: None, loading: false });
        self.writer.sign_out(reason);
    }

    /// The bootstrap probe found no session.
    pub fn finish_loading(&self) {
        self.session.update(|s| s.loading = false);
    }

    /// React to a failed authenticated call. Returns `true` when the failure
    /// ended the session.
    pub fn handle_api_error(&self, err: &ApiError) -> bool {
        if *err != ApiError::Unauthorized || !self.is_authenticated() {
            return false;
        }
        self.signed_out(SignOutReason::SessionExpired);
        true
    }
}

impl Default for AuthSession {
    fn default() -> Self {
        Self::new()
    }
}
