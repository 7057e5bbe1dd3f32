//! Session bootstrap on page load.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend keeps the session in a cookie; the client learns whether it is
//! still valid by probing `/user` once when the app mounts.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::api::ApiError;
use crate::net::types::User;
use crate::state::auth::AuthSession;

/// Apply the result of the `/user` probe to the session.
pub(crate) fn apply_probe(auth: &AuthSession, probe: Result<User, ApiError>) {
    match probe {
        Ok(user) => auth.signed_in(user),
        Err(ApiError::Unauthorized | ApiError::Unavailable) => auth.finish_loading(),
        Err(e) => {
            #[cfg(feature = "csr")]
            log::warn!("session probe failed: {e}");
            #[cfg(not(feature = "csr"))]
            let _ = e;
            auth.finish_loading();
        }
    }
}

/// Probe the backend for an existing session.
pub fn bootstrap_session(auth: AuthSession, config: crate::config::ClientConfig) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let probe = crate::net::api::fetch_current_user(&config).await;
        apply_probe(&auth, probe);
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        apply_probe(&auth, Err(ApiError::Unavailable));
    }
}
