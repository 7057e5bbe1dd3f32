//! # client
//!
//! Leptos + WASM storefront frontend.
//!
//! This crate contains pages, components, session state and the REST client
//! for the storefront backend. Actions that need a signed-in customer go
//! through an `authgate` gate, which defers them behind the auth modal until
//! sign-in completes.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point. The storefront backend serves plain HTML, so the app
/// renders client-side into `<body>`.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
