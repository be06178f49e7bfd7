//! # grimoire-client
//!
//! Leptos + WASM frontend for the Grimoire campaign companion: a
//! single-page client providing navigation, a theme switcher, and
//! authentication against the remote Grimoire API.
//!
//! This crate contains pages, components, application state, the persisted
//! preference and session stores, and the authentication API client.
//! Browser integrations are gated behind the `csr` feature so the state and
//! networking logic stays testable on native targets.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod storage;
pub mod util;

/// WASM entry point: set up logging and mount the application.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}
