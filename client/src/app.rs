//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_modal::AuthModal;
use crate::config::ClientConfig;
use crate::pages::catalog::CatalogPage;
use crate::state::auth::AuthSession;
use crate::state::gate::AuthGate;
use crate::util::session::bootstrap_session;

/// Root application component.
///
/// Provides the config, the auth session and the app-wide gate, mounts the
/// credential modal once, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_env();
    let auth = AuthSession::new();
    let gate = AuthGate::new(&auth.reader());

    provide_context(config.clone());
    provide_context(auth.clone());
    provide_context(gate);

    bootstrap_session(auth, config);

    let hide = gate.hide_handle();
    let on_hide = Callback::new(move |()| {
        if let Some(hide) = &hide {
            hide.hide();
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Storefront"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=CatalogPage/>
            </Routes>
        </Router>

        <AuthModal visible=gate.modal_visible() initial_tab=gate.initial_tab() on_hide=on_hide/>
    }
}
