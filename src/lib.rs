pub mod common;
pub mod config;
pub mod frontend;
pub mod i18n;
pub mod models;
pub mod services;

/// WASM entry point for the client-side build
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(frontend::App);
}
