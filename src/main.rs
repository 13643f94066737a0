#![allow(warnings)]
//! Start Page Frontend Entry Point

mod models;
mod config;
mod storage;
mod list_store;
mod history;
mod todo;
mod search;
mod theme;
mod background;
mod clock;
mod commands;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
