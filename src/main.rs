//! Movie Shelf Frontend Entry Point

mod models;
mod error;
mod config;
mod api;
mod content;
mod context;
mod store;
mod markdown;
mod components;
mod pages;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // Logging is only up after the level is known
    if console_log::init_with_level(config.log_level()).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    if let Some(e) = config_error {
        log::warn!("[APP] {}; using default configuration", e);
    }
    log::info!("[APP] Starting with {:?}", config);

    mount_to_body(move || view! { <App config=config /> });
}
