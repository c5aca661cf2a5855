//! # client
//!
//! Leptos + WASM admin front end for the task bank REST API.
//!
//! This crate contains the request client, the session manager and its
//! token store, the route guard, and the pages and components of the admin
//! UI. The `taskbank` host crate renders it with SSR and serves the
//! hydrated bundle.

#![recursion_limit = "256"]

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
