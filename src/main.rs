//! Code Composer Frontend Entry Point

mod app;
mod commands;
mod components;
mod context;
mod logging;
mod store;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(LevelFilter::Info);

    let settings = context::load_settings();
    log::set_max_level(settings.level_filter());

    mount_to_body(move || view! { <App settings=settings /> });
}
