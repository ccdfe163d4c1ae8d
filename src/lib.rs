//! # rxq-console
//!
//! Leptos + WASM admin console shell: animated login/signup, a collapsible
//! sidebar, a static metrics dashboard, and two entry forms.
//!
//! The one stateful subsystem is the client-side session lifecycle in
//! `state::session` and `state::guard`, with the auth form state machine in
//! `state::auth_form`. Pages and components render over that state.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod ssr;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
