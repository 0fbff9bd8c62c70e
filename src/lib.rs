//! # bookclub-client
//!
//! Leptos + WASM front-end for the book-club application. Replaces the
//! React `frontend/` with a Rust-native UI layer.
//!
//! This crate contains pages, presentational components (book cards, the
//! book list, footer, floating cover carousel), the render error boundary,
//! view-model state, and the REST types for the book backend.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;

/// Browser entry point: installs panic/log hooks and hydrates the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
