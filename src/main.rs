#![allow(warnings)]
//! Receipt Form Entry Point

mod models;
mod rows;
mod context;
mod store;
mod storage;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
