//! # topcars
//!
//! Leptos + WASM frontend for a car rental landing page. The centerpiece is
//! the top-cars section: it fetches the current car listings once on mount,
//! stores them in shared application state, and presents them as a paginated,
//! dot-indicated carousel whose page size follows the viewport width.
//!
//! This crate contains pages, components, application state, network types,
//! and the listings API client. It builds for the browser (`hydrate` feature)
//! and for server-side rendering (`ssr` feature).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs the panic hook and console logger, then
/// hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
