//! # client
//!
//! Leptos + WASM front-end for the service desk.
//!
//! This crate contains the session store persisted to `sessionStorage`, the
//! route table and its auth guard, the `/api` client that attaches the
//! bearer token to every request, and the pages built on top of them.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod router;
pub mod session;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
