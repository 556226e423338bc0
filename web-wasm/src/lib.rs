//! doc parser Web App (Leptos + WASM)

pub mod app;
pub mod components;
pub mod api;
pub mod export;
pub mod logger;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    logger::init(level);

    leptos::mount::mount_to_body(app::App);
}
