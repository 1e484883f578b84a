// Bindings for JavaScript hosts, compiled with the `wasm` feature

pub mod api;
pub mod types;

use wasm_bindgen::prelude::*;

/// Route Rust panics to the browser console
#[wasm_bindgen(start)]
pub fn install_panic_hook() {
    console_error_panic_hook::set_once();
}
