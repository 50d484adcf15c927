//! # auth-panel-ui
//!
//! Leptos + WASM sign-in / sign-up panel with Google sign-in.
//!
//! The panel validates the password forms client-side, decodes Google
//! identity tokens, and keeps the signed-in profile in `localStorage`. The
//! `ssr` feature renders it on the server; `hydrate` builds the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered panel.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let identity = config::IdentityConfig::from_document();
    if !identity.federated_enabled() {
        log::info!("no Google client id configured; federated sign-in disabled");
    }
    leptos::mount::hydrate_body(move || {
        provide_context(identity);
        view! { <App/> }
    });
}
