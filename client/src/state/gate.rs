//! Leptos binding for [`DeferredActionGate`].
//!
//! DESIGN
//! ======
//! The gate lives in a `StoredValue`, so it is dropped (and its auth
//! subscription released) when the owning scope is cleaned up. Gate state is
//! mirrored into a signal through `watch` so views re-render on change.
//! Callers clone the `Arc` out of the store before touching the gate; no
//! arena lock is held while a deferred action runs.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use std::sync::Arc;

use authgate::{AuthState, AuthTab, DeferredActionGate, GateOutcome, GateSnapshot, HideHandle, Subscription};
use leptos::prelude::*;

struct BoundGate {
    gate: DeferredActionGate,
    _mirror: Subscription,
}

/// Copyable handle to a scope-owned gate.
#[derive(Clone, Copy)]
pub struct AuthGate {
    inner: StoredValue<Arc<BoundGate>>,
    view: RwSignal<GateSnapshot>,
}

impl AuthGate {
    /// Create a gate on `auth`, owned by the current reactive scope.
    #[must_use]
    pub fn new(auth: &AuthState) -> Self {
        let gate = DeferredActionGate::new(auth);
        let view = RwSignal::new(gate.snapshot());
        let mirror = gate.watch(move |snapshot| {
            let _ = view.try_set(*snapshot);
        });
        Self {
            inner: StoredValue::new(Arc::new(BoundGate { gate, _mirror: mirror })),
            view,
        }
    }

    fn bound(&self) -> Option<Arc<BoundGate>> {
        self.inner.try_get_value()
    }

    /// Run `action` now if signed in, else park it and open the auth modal on `tab`.
    ///
    /// Returns `None` if the owning scope is already gone.
    pub fn require_auth<F>(&self, action: F, tab: AuthTab) -> Option<GateOutcome>
    where
        F: FnOnce() + Send + 'static,
    {
        let bound = self.bound()?;
        Some(bound.gate.require_auth(action, tab))
    }

    pub fn open(&self, tab: AuthTab) {
        if let Some(bound) = self.bound() {
            bound.gate.open_auth_modal(tab);
        }
    }

    pub fn close(&self) {
        if let Some(bound) = self.bound() {
            bound.gate.close_auth_modal();
        }
    }

    /// Hide handle to hand to the credential surface.
    #[must_use]
    pub fn hide_handle(&self) -> Option<HideHandle> {
        self.bound().map(|bound| bound.gate.surface().on_hide)
    }

    /// Reactive gate state.
    #[must_use]
    pub fn view(&self) -> ReadSignal<GateSnapshot> {
        self.view.read_only()
    }

    #[must_use]
    pub fn modal_visible(&self) -> Signal<bool> {
        let view = self.view;
        Signal::derive(move || view.get().modal_visible)
    }

    #[must_use]
    pub fn initial_tab(&self) -> Signal<AuthTab> {
        let view = self.view;
        Signal::derive(move || view.get().initial_tab)
    }
}

/// The app-wide gate provided by [`App`](crate::app::App).
#[must_use]
pub fn use_auth_gate() -> AuthGate {
    expect_context::<AuthGate>()
}
