//! # campus-events
//!
//! Leptos + WASM front-end for the college event-management platform.
//! Students browse and register for events; admins review events and their
//! registrants.
//!
//! The core is the authenticated-session and role-gated routing model:
//! `net::api` is the gateway every call passes through, `state::session`
//! owns the signed-in identity, and `routes` decides per navigation whether
//! a view may render. `pages` and `components` are thin consumers of both.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod routes;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
