//! Career Roadmap web app

mod api;
mod app;
mod components;
mod context;
mod history;
mod outlet;
mod pages;
mod scroll;
mod views;

use app::App;
use context::AppContext;
use leptos::*;

fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    match AppContext::new() {
        Ok(ctx) => mount_to_body(move || {
            view! {
                <App ctx=ctx/>
            }
        }),
        Err(e) => tracing::error!("Failed to build route table: {}", e),
    }
}
