//! Stablecoin Vault front-end
//!
//! Browser app for depositing stablecoins into, and withdrawing them from, a
//! yield-bearing vault. All decisions live in `lib-core`; this crate wires
//! them to the DOM, the backend (`fetch`) and the wallet (EIP-1193).

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

mod app;
mod components;
mod services;
mod state;
mod utils;

use app::App;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Initialize logger; lib-core's tracing events are forwarded here too
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Vault front-end starting...");

    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the loading screen element
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("No document available");
        return;
    };

    match document.get_element_by_id("leptos-loading") {
        Some(loading_element) => {
            if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
                if let Err(e) = html_element.class_list().add_1("hidden") {
                    log::warn!("Failed to hide loading screen: {:?}", e);
                }
            }
        }
        None => log::debug!("Loading element not found"),
    }
}
