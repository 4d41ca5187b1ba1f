//! # dashboard-client
//!
//! Leptos + WASM frontend for the product dashboard.
//!
//! This crate contains pages, components, session/listing state, REST types,
//! and the HTTP backend used to talk to the product API. The host server
//! renders [`app::shell`] on the server; the browser bundle calls
//! [`hydrate`] to take over.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"console logger already installed".into());
    }
    leptos::mount::hydrate_body(app::App);
}
