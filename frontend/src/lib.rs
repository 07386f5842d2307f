//! WASM entry point for the Cinegrid frontend.

use app::App;
use wasm_bindgen::prelude::wasm_bindgen;

/// Mount the application onto the document body.
///
/// Runs automatically when the WASM module is loaded.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::mount_to_body(App);
}
