//! # admin-session
//!
//! Leptos + WASM session and authorization layer for the admin console.
//!
//! Owns the session credential (two-tier browser storage), the shared
//! session state and its single writer, route classification for layout and
//! access, the login redirect round-trip, and capability-gated rendering.
//! Works under SSR, where storage does not exist and everything degrades to
//! "not signed in yet".

pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod error;
pub mod login;
pub mod net;
pub mod pages;
pub mod routes;
pub mod session;
pub mod state;
pub mod storage;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
