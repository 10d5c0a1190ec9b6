//! Lead Capture Site
//!
//! A client-rendered Leptos page hosting the lead form.

mod app;
mod components;
mod config;
mod pages;

use app::App;
use leptos::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let submit = config::submit_config();
    tracing::info!(
        "Mounting lead form (endpoint {}, honeypot stripped: {})",
        submit.endpoint,
        submit.strip_honeypot
    );

    mount_to_body(App);
}
