//! # client
//!
//! Leptos front end for TruthGuard AI: marketing home page, claim browsing,
//! claim detail with live analysis status, dashboard, and auth pages.
//!
//! Compiled twice: with `ssr` for server rendering inside the Axum host, and
//! with `hydrate` as the WASM bundle that takes over in the browser.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/log hooks and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    let config = config::ClientConfig::from_document();
    log::info!("hydrating with backend configured: {}", config.backend_url.is_some());
    leptos::mount::hydrate_body(move || leptos::view! { <app::App config/> });
}
