//! Thursday Club Registration Frontend Entry Point

mod models;
mod api;
mod config;
mod state;
mod notify;
mod controller;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    mount_to_body(App);
}
