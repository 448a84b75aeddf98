//! Todo Sync Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod identity;
mod models;
mod render;
mod storage;
mod store;
mod sync;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

/// `<meta name="todo-config" content='{...}'>` overrides the defaults
fn config_override() -> Option<String> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector("meta[name=todo-config]").ok().flatten())
        .and_then(|el| el.get_attribute("content"))
}

fn main() {
    console_error_panic_hook::set_once();

    let parsed = config_override().map(|raw| AppConfig::from_json(&raw));
    let config = match &parsed {
        Some(Ok(config)) => config.clone(),
        _ => AppConfig::default(),
    };
    if let Err(e) = rolling_logger::init_logger("TodoSync", config.log_capacity) {
        web_sys::console::warn_1(&format!("Logger already installed: {}", e).into());
    }
    if let Some(Err(e)) = parsed {
        log::warn!("Ignoring invalid todo-config: {}", e);
    }

    log::info!("Starting with {} candidate endpoints", config.endpoints.len());
    mount_to_body(move || view! { <App config=config /> });
}
