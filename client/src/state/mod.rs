//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` owns the session (the only writer of the auth flag); `gate` binds
//! deferred-action gates to Leptos scopes and signals.

pub mod auth;
pub mod gate;
