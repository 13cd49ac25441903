//! Yalla Nadrus Web Frontend
//!
//! Leptos-based WASM landing page: hero, subject grid, filterable tutor
//! directory and the static information sections.

mod app;
mod pages;
mod components;
mod content;
mod api;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
