#![allow(warnings)]
//! Facility Dashboard Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod logger;
mod toasts;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Debug);
    mount_to_body(App);
}
