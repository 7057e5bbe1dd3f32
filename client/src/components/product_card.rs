//! Catalog product card with an auth-gated "Add to cart" action.

#[cfg(test)]
#[path = "product_card_test.rs"]
mod product_card_test;

use authgate::AuthTab;
use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::types::{CartItemRequest, Product};
use crate::state::auth::AuthSession;
use crate::state::gate::use_auth_gate;

/// Feedback line under the add-to-cart button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum CartStatus {
    Adding,
    Added,
    Failed(String),
}

impl CartStatus {
    pub(crate) fn message(&self) -> String {
        match self {
            Self::Adding => "Adding…".to_owned(),
            Self::Added => "Added to cart".to_owned(),
            Self::Failed(reason) => format!("Could not add to cart: {reason}"),
        }
    }
}

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let auth = expect_context::<AuthSession>();
    let config = expect_context::<ClientConfig>();
    let gate = use_auth_gate();
    let status = RwSignal::new(None::<CartStatus>);
    let product_id = product.id;

    let on_add = move |_| {
        let item = CartItemRequest { product_id, quantity: 1 };
        // Runs now when signed in, or right after the user signs in.
        gate.require_auth(add_to_cart_action(item, auth.clone(), config.clone(), status), AuthTab::Login);
    };

    view! {
        <article class="product-card">
            {product.image.map(|src| view! { <img class="product-card__image" src=src alt=""/> })}
            <h3 class="product-card__name">{product.name}</h3>
            <p class="product-card__price">{product.price}</p>
            <button
                class="btn btn--primary product-card__add"
                disabled=move || status.get() == Some(CartStatus::Adding)
                on:click=on_add
            >
                "Add to cart"
            </button>
            <Show when=move || status.get().is_some()>
                <p class="product-card__status">
                    {move || status.get().map(|s| s.message()).unwrap_or_default()}
                </p>
            </Show>
        </article>
    }
}

fn add_to_cart_action(
    item: CartItemRequest,
    auth: AuthSession,
    config: ClientConfig,
    status: RwSignal<Option<CartStatus>>,
) -> impl FnOnce() + Send + 'static {
    move || {
        status.set(Some(CartStatus::Adding));
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::add_to_cart(&config, item).await {
                Ok(()) => status.set(Some(CartStatus::Added)),
                Err(e) => {
                    auth.handle_api_error(&e);
                    status.set(Some(CartStatus::Failed(e.to_string())));
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (item, auth, config);
            status.set(Some(CartStatus::Failed("not available on server".to_owned())));
        }
    }
}
