//! Meal Board Entry Point

mod actions;
mod api;
mod app;
mod components;
mod config;
mod context;
mod encoding;
mod logger;
mod menu;
mod models;
mod store;
mod week;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    logger::init(config.log_level);
    log::debug!("config: {:?}", config);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
