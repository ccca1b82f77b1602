//! # lead-dashboard
//!
//! Leptos + WASM admin dashboard for a lead-extraction webhook service.
//!
//! The browser bundle (`hydrate`) authenticates against the lead API, keeps
//! the session in `localStorage`, and gates routes by role. The `ssr` feature
//! adds the Axum host that server-renders the shell and serves the bundle.

pub mod app;
pub mod components;
pub mod config;
#[cfg(feature = "ssr")]
pub mod host;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
