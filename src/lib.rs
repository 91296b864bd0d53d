#![allow(non_snake_case)]

pub mod bindings;
pub mod components;
pub mod config;
pub mod error;
pub mod services;
pub mod utils;

mod app;

pub use app::App;

use wasm_bindgen::prelude::*;

/// Install the panic hook and logger, then mount the page.
#[cfg_attr(not(test), wasm_bindgen(start))]
pub fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Route `log` macros to the browser console
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("Logger already initialised: {e}").into());
    }

    log::info!("Starting Fake News Detector frontend (Leptos)");

    // Remove the static placeholder shown before the wasm bundle loads
    if let Some(loader) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app-loading"))
    {
        loader.remove();
    }

    leptos::mount::mount_to_body(App);
}
