use leptos::prelude::*;

use super::*;

fn user() -> User {
    User { id: 4, name: "Linus".to_owned(), email: "linus@example.com".to_owned() }
}

#[test]
fn successful_probe_signs_in() {
    Owner::new().with(|| {
        let auth = AuthSession::new();
        apply_probe(&auth, Ok(user()));
        assert!(auth.is_authenticated());
        assert_eq!(auth.session.get_untracked().user, Some(user()));
    });
}

#[test]
fn unauthorized_probe_just_stops_loading() {
    Owner::new().with(|| {
        let auth = AuthSession::new();
        apply_probe(&auth, Err(ApiError::Unauthorized));
        assert!(!auth.is_authenticated());
        assert!(!auth.session.get_untracked().loading);
    });
}

#[test]
fn failed_probe_stops_loading_without_signing_in() {
    Owner::new().with(|| {
        let auth = AuthSession::new();
        apply_probe(&auth, Err(ApiError::Network("offline".to_owned())));
        assert!(!auth.is_authenticated());
        assert!(!auth.session.get_untracked().loading);
    });
}

#[cfg(not(feature = "csr"))]
#[test]
fn bootstrap_outside_browser_settles_signed_out() {
    Owner::new().with(|| {
        let auth = AuthSession::new();
        assert!(auth.session.get_untracked().loading);

        bootstrap_session(auth.clone(), crate::config::ClientConfig::from_env());

        assert!(!auth.is_authenticated());
        assert!(!auth.session.get_untracked().loading);
    });
}
