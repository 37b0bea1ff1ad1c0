#![allow(warnings)]
//! Donation Board Frontend Entry Point

mod models;
mod config;
mod storage;
mod capture;
mod submission;
mod store;
mod components;
mod app;

use app::App;
use config::BoardConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = BoardConfig::default();
    if let Err(e) = console_logger::init_logger("DonationBoard", config.log_level) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }

    mount_to_body(move || view! { <App config=config /> });
}
