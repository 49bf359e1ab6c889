//! Kanban Frontend Entry Point

mod app;
mod board;
mod components;
mod config;
mod context;
mod date;
mod error;
mod ids;
mod logging;
mod models;
mod reorder;
mod storage;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use storage::BrowserStorage;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load(&BrowserStorage);
    logging::init(config.log_level());

    mount_to_body(move || view! { <App config=config /> });
}
