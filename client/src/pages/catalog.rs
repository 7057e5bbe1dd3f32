//! Storefront landing page: product grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browsing is open to everyone; cart actions are gated per card. A
//! `?auth=login|register` query parameter opens the auth modal on arrival
//! (used by links in emails and from other pages).

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use authgate::AuthTab;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::account_menu::AccountMenu;
use crate::components::product_card::ProductCard;
use crate::config::ClientConfig;
use crate::net::types::Product;
use crate::state::gate::use_auth_gate;

/// Parse the `auth` query parameter; unknown values are ignored.
pub(crate) fn auth_tab_from_query(raw: Option<&str>) -> Option<AuthTab> {
    raw?.parse().ok()
}

#[derive(Clone, Debug, Default)]
struct CatalogState {
    items: Vec<Product>,
    loading: bool,
    error: Option<String>,
}

#[component]
pub fn CatalogPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let gate = use_auth_gate();
    let query = use_query_map();
    let catalog = RwSignal::new(CatalogState { loading: true, ..CatalogState::default() });

    Effect::new(move || {
        let requested = query.with(|q| auth_tab_from_query(q.get("auth").as_deref()));
        if let Some(tab) = requested {
            gate.open(tab);
        }
    });

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_products(&config).await;
        catalog.update(|c| {
            c.loading = false;
            match result {
                Ok(items) => c.items = items,
                Err(e) => {
                    log::warn!("product list failed: {e}");
                    c.error = Some(e.to_string());
                }
            }
        });
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }

    view! {
        <div class="catalog-page">
            <header class="catalog-page__header toolbar">
                <span class="toolbar__title">"Storefront"</span>
                <span class="toolbar__spacer"></span>
                <AccountMenu/>
            </header>
            <Show when=move || catalog.get().error.is_some()>
                <p class="catalog-page__error">{move || catalog.get().error.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !catalog.get().loading
                fallback=move || view! { <p>"Loading products..."</p> }
            >
                <div class="catalog-page__grid">
                    {move || {
                        catalog
                            .get()
                            .items
                            .into_iter()
                            .map(|product| view! { <ProductCard product=product/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}
