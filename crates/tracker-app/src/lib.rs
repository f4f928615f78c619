//! Tracker console WASM entry point.
//!
//! This crate is the composition root. It builds the HTTP and download
//! adapters, hands them to the controller, and binds the page's controls.

mod app;

use wasm_bindgen::prelude::*;

pub use app::{config_from_page, rejection_reason, API_BASE_META};

/// Runs when the module is instantiated by index.html
#[wasm_bindgen(start)]
pub fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Tracker console starting...");

    if let Err(e) = app::mount() {
        log::error!("Failed to mount tracker console: {}", e);
    }
}
