//! Browser entry point of the documentation site.

#![recursion_limit = "256"]

use app::App;
use wasm_bindgen::prelude::wasm_bindgen;

/// Mount the application once the wasm module is loaded.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger not installed: {err}");
    }
    log::info!("mounting techdocs");

    leptos::mount::mount_to_body(App);
}
