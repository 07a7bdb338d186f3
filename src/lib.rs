//! # music-dashboard
//!
//! Leptos + WASM browser dashboard for exploring a music catalog served by a
//! remote REST backend: genre/tempo, artist, chart, mood and mix playlists,
//! discovery search, and saved playlists per user.
//!
//! The crate holds the panel controllers, the schema-inferring result table,
//! the dual-thumb range selector, and the query builder / fetch gateway that
//! sits between them and the backend. Browser-only code sits behind the `csr`
//! feature; everything else builds and tests natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod panels;
pub mod state;
pub mod util;

/// WASM entry point: install logging and the panic hook, then mount [`app::App`].
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = config::DashboardConfig::from_build_env();
    log::debug!("backend: {}", config.backend_url());
    leptos::mount::mount_to_body(move || view! { <app::App config=config.clone()/> });
}
