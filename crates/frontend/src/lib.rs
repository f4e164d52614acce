pub mod app;
pub mod config;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use contracts::domain::content_hub::ContentCatalog;
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::config::AppConfig;

#[wasm_bindgen]
pub fn hydrate() {
    let config = AppConfig::from_location();

    // initializes logging using the `log` crate
    _ = console_log::init_with_level(config.log_level);
    console_error_panic_hook::set_once();

    log::info!(
        "{} starting (dev_mode={}, log_level={})",
        config.app_title,
        config.dev_mode,
        config.log_level
    );
    // Declared child counts are shown as authored; only report mismatches
    for drift in ContentCatalog::global().count_drift() {
        log::warn!("{}", drift);
    }

    leptos::mount::mount_to_body(move || view! { <app::App config=config /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
