//! Credential surface: sign-in / register modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered once by `App` from the app gate's state. It never talks to the
//! gate directly: dismissal goes through `on_hide`, and a successful exchange
//! goes through [`AuthSession::signed_in`], whose auth transition makes the
//! gate fire its pending action and hide this modal.

#[cfg(test)]
#[path = "auth_modal_test.rs"]
mod auth_modal_test;

use authgate::AuthTab;
use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::types::{LoginRequest, RegisterRequest};
use crate::state::auth::AuthSession;

/// Minimum password length accepted by the backend.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Trim and check login fields.
pub(crate) fn validate_login_input(email: &str, password: &str, remember: bool) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    if !looks_like_email(email) {
        return Err("Enter a valid email address.");
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned(), remember })
}

/// Trim and check registration fields.
pub(crate) fn validate_register_input(
    name: &str,
    email: &str,
    password: &str,
    password_confirmation: &str,
) -> Result<RegisterRequest, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in every field.");
    }
    if !looks_like_email(email) {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if password != password_confirmation {
        return Err("Passwords do not match.");
    }
    Ok(RegisterRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        password_confirmation: password_confirmation.to_owned(),
    })
}

/// Keys that dismiss the modal.
pub(crate) fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

fn looks_like_email(email: &str) -> bool {
    email
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.') && !domain.ends_with('.'))
}

/// Modal collecting credentials on a login or register tab.
#[component]
pub fn AuthModal(
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] initial_tab: Signal<AuthTab>,
    on_hide: Callback<()>,
) -> impl IntoView {
    let session = expect_context::<AuthSession>();
    let config = expect_context::<ClientConfig>();
    let tab = RwSignal::new(AuthTab::Login);
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password_confirmation = RwSignal::new(String::new());
    let remember = RwSignal::new(true);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // Every time the modal opens, start on the requested tab with a clean slate.
    Effect::new(move || {
        if visible.get() {
            tab.set(initial_tab.get());
            password.set(String::new());
            password_confirmation.set(String::new());
            error.set(None);
            busy.set(false);
        }
    });

    // Focus the dialog once it mounts so Escape reaches its keydown handler.
    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    #[cfg(feature = "csr")]
    {
        Effect::new(move || {
            let Some(dialog) = dialog_ref.get() else {
                return;
            };
            let _ = dialog.focus();
        });
    }

    let on_backdrop = move |_| on_hide.run(());
    let on_close_click = move |_| on_hide.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            on_hide.run(());
        }
    });

    let on_submit = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let validated = match tab.get_untracked() {
            AuthTab::Login => validate_login_input(
                &email.get_untracked(),
                &password.get_untracked(),
                remember.get_untracked(),
            )
            .map(Credentials::Login),
            AuthTab::Register => validate_register_input(
                &name.get_untracked(),
                &email.get_untracked(),
                &password.get_untracked(),
                &password_confirmation.get_untracked(),
            )
            .map(Credentials::Register),
        };
        let credentials = match validated {
            Ok(credentials) => credentials,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        exchange(credentials, session.clone(), config.clone(), busy, error);
    });

    let tab_class = move |which: AuthTab| {
        if tab.get() == which { "auth-modal__tab auth-modal__tab--active" } else { "auth-modal__tab" }
    };
    let is_register = move || tab.get() == AuthTab::Register;

    view! {
        <Show when=move || visible.get()>
            <div class="dialog-backdrop" on:click=on_backdrop>
                <div
                    node_ref=dialog_ref
                    class="dialog auth-modal"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev| on_keydown.run(ev)
                    tabindex="0"
                >
                    <div class="auth-modal__tabs" role="tablist">
                        <button
                            class=move || tab_class(AuthTab::Login)
                            on:click=move |_| {
                                tab.set(AuthTab::Login);
                                error.set(None);
                            }
                        >
                            "Sign in"
                        </button>
                        <button
                            class=move || tab_class(AuthTab::Register)
                            on:click=move |_| {
                                tab.set(AuthTab::Register);
                                error.set(None);
                            }
                        >
                            "Create account"
                        </button>
                        <button class="auth-modal__close" on:click=on_close_click title="Close">
                            "✕"
                        </button>
                    </div>
                    <form class="auth-modal__form" on:submit=move |ev| on_submit.run(ev)>
                        <Show when=is_register>
                            <label class="dialog__label">
                                "Name"
                                <input
                                    class="dialog__input"
                                    type="text"
                                    autocomplete="name"
                                    prop:value=move || name.get()
                                    on:input=move |ev| name.set(event_target_value(&ev))
                                />
                            </label>
                        </Show>
                        <label class="dialog__label">
                            "Email"
                            <input
                                class="dialog__input"
                                type="email"
                                autocomplete="email"
                                placeholder="you@example.com"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "Password"
                            <input
                                class="dialog__input"
                                type="password"
                                autocomplete=move || if is_register() { "new-password" } else { "current-password" }
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </label>
                        <Show
                            when=is_register
                            fallback=move || {
                                view! {
                                    <label class="auth-modal__remember">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || remember.get()
                                            on:change=move |ev| remember.set(event_target_checked(&ev))
                                        />
                                        "Remember me"
                                    </label>
                                }
                            }
                        >
                            <label class="dialog__label">
                                "Confirm password"
                                <input
                                    class="dialog__input"
                                    type="password"
                                    autocomplete="new-password"
                                    prop:value=move || password_confirmation.get()
                                    on:input=move |ev| password_confirmation.set(event_target_value(&ev))
                                />
                            </label>
                        </Show>
                        <Show when=move || error.get().is_some()>
                            <p class="auth-modal__error">{move || error.get().unwrap_or_default()}</p>
                        </Show>
                        <div class="dialog__actions">
                            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                {move || match (busy.get(), tab.get()) {
                                    (true, _) => "Please wait…",
                                    (false, AuthTab::Login) => "Sign in",
                                    (false, AuthTab::Register) => "Create account",
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

enum Credentials {
    Login(LoginRequest),
    Register(RegisterRequest),
}

/// Run the credential exchange; on success flip the session, which closes
/// this modal through the gate.
fn exchange(
    credentials: Credentials,
    session: AuthSession,
    config: ClientConfig,
    busy: RwSignal<bool>,
    error: RwSignal<Option<String>>,
) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            let result = match &credentials {
                Credentials::Login(req) => crate::net::api::login(&config, req).await,
                Credentials::Register(req) => crate::net::api::register(&config, req).await,
            };
            busy.set(false);
            match result {
                Ok(user) => {
                    log::info!("signed in as user {}", user.id);
                    session.signed_in(user);
                }
                Err(e) => {
                    log::warn!("credential exchange failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (credentials, session, config);
        busy.set(false);
        error.set(Some("Sign-in is only available in the browser.".to_owned()));
    }
}
