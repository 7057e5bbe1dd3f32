//! Header account controls: sign in / register, or the signed-in user with logout.

use authgate::{AuthTab, SignOutReason};
use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::state::auth::AuthSession;
use crate::state::gate::use_auth_gate;

#[component]
pub fn AccountMenu() -> impl IntoView {
    let auth = expect_context::<AuthSession>();
    let config = expect_context::<ClientConfig>();
    let gate = use_auth_gate();
    let session = auth.session;

    let on_logout = move |_| {
        let auth = auth.clone();
        let config = config.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::logout(&config).await {
                log::warn!("logout request failed: {e}");
            }
            auth.signed_out(SignOutReason::Logout);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = config;
            auth.signed_out(SignOutReason::Logout);
        }
    };

    view! {
        <div class="account-menu">
            <Show
                when=move || session.get().user.is_some()
                fallback=move || {
                    view! {
                        <button
                            class="btn account-menu__login"
                            disabled=move || session.get().loading
                            on:click=move |_| gate.open(AuthTab::Login)
                        >
                            "Sign in"
                        </button>
                        <button
                            class="btn btn--primary account-menu__register"
                            disabled=move || session.get().loading
                            on:click=move |_| gate.open(AuthTab::Register)
                        >
                            "Register"
                        </button>
                    }
                }
            >
                <span class="account-menu__user">
                    {move || session.get().user.map(|u| u.name).unwrap_or_default()}
                </span>
                <button class="btn account-menu__logout" on:click=on_logout.clone() title="Logout">
                    "Logout"
                </button>
            </Show>
        </div>
    }
}
