// ============================================================================
// PHARMACY STOREFRONT - Client-side page scripting (Rust + WASM)
// ============================================================================
// Progressive enhancement over server-rendered pages:
// - forms: validation + simulated submission (login, register, profile)
// - search: mock catalog filtering + result rendering
// - services: auth/catalog/session seams (all mock, no network)
// - views: dynamically created DOM (toasts, result cards)
// - ui: carousel, scroll animations, accessibility, responsive tweaks
// - dom: thin helpers over web-sys
// ============================================================================

pub mod app;
pub mod dom;
pub mod forms;
pub mod models;
pub mod search;
pub mod services;
pub mod state;
pub mod ui;
pub mod utils;
pub mod views;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    log::info!("🚀 Pharmacy storefront scripting starting");

    app::boot()
}
