#![allow(warnings)]
//! check42 Console Entry Point

mod api;
mod app;
mod browser;
mod checklist;
mod components;
mod config;
mod context;
mod inflight;
mod models;
mod session;
mod store;

use app::App;
use config::Config;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = Config::from_window();
    mount_to_body(move || view! { <App config=config /> });
}
