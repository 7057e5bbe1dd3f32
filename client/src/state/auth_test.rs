use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use authgate::{AuthTab, DeferredActionGate, GateOutcome};

use super::*;

fn user() -> User {
    User { id: 1, name: "Ada".to_owned(), email: "ada@example.com".to_owned() }
}

fn with_owner<T>(f: impl FnOnce() -> T) -> T {
    Owner::new().with(f)
}

// =============================================================
// SessionState defaults
// =============================================================

#[test]
fn session_state_default_no_user() {
    let state = SessionState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn new_session_is_loading_and_signed_out() {
    with_owner(|| {
        let auth = AuthSession::new();
        assert!(auth.session.get_untracked().loading);
        assert!(!auth.is_authenticated());
    });
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn signed_in_sets_user_and_flag() {
    with_owner(|| {
        let auth = AuthSession::new();
        let reader = auth.reader();

        auth.signed_in(user());

        assert!(reader.is_authenticated());
        assert_eq!(auth.session.get_untracked(), SessionState { user: Some(user()), loading: false });
    });
}

#[test]
fn signed_out_clears_user_and_flag() {
    with_owner(|| {
        let auth = AuthSession::new();
        auth.signed_in(user());

        auth.signed_out(SignOutReason::Logout);

        assert!(!auth.is_authenticated());
        assert_eq!(auth.session.get_untracked().user, None);
    });
}

#[test]
fn finish_loading_keeps_user_absent() {
    with_owner(|| {
        let auth = AuthSession::new();
        auth.finish_loading();
        assert_eq!(auth.session.get_untracked(), SessionState::default());
    });
}

// =============================================================
// Session expiry
// =============================================================

#[test]
fn unauthorized_error_expires_active_session() {
    with_owner(|| {
        let auth = AuthSession::new();
        auth.signed_in(user());

        assert!(auth.handle_api_error(&ApiError::Unauthorized));
        assert!(!auth.is_authenticated());
    });
}

#[test]
fn other_errors_leave_session_alone() {
    with_owner(|| {
        let auth = AuthSession::new();
        auth.signed_in(user());

        assert!(!auth.handle_api_error(&ApiError::Status(500)));
        assert!(auth.is_authenticated());
    });
}

#[test]
fn unauthorized_while_signed_out_is_not_an_expiry() {
    with_owner(|| {
        let auth = AuthSession::new();
        assert!(!auth.handle_api_error(&ApiError::Unauthorized));
    });
}

// =============================================================
// Gate integration
// =============================================================

#[test]
fn sign_in_fires_action_deferred_on_session_reader() {
    with_owner(|| {
        let auth = AuthSession::new();
        let gate = DeferredActionGate::new(&auth.reader());
        let hits = Arc::new(AtomicUsize::new(0));
        let hits_action = Arc::clone(&hits);

        let outcome = gate.require_auth(
            move || {
                hits_action.fetch_add(1, Ordering::SeqCst);
            },
            AuthTab::Login,
        );
        assert_eq!(outcome, GateOutcome::Deferred);

        auth.signed_in(user());

        assert_eq!(hits.load(Ordering::SeqCst), 1);
        assert!(!gate.is_modal_visible());
    });
}
