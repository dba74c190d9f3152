//! Taskpad Frontend Entry Point

mod app;
mod components;
mod context;
mod models;
mod notify;
#[cfg(any(test, feature = "sync"))]
mod remote;
#[cfg(not(feature = "sync"))]
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        wasm_tracing::set_as_global_default();
    }

    tracing::info!("starting taskpad frontend");
    mount_to_body(App);
}
