use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use gloo_timers::future::TimeoutFuture;

pub mod components;
pub mod constants;
pub mod dom_utils;
pub mod messages;
pub mod models;
pub mod state;
pub mod subscriptions;
pub mod theme;
pub mod toast;
pub mod update;
pub mod views;

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))?;

    // Inject the page stylesheet and show the loading indicator. The page
    // itself mounts only after the Loading -> Ready transition below.
    views::ensure_page_styles(&document)?;
    views::render_loading(&document)?;

    // Toast root lives at the page root; nothing in the core logic fires it.
    toast::mount(&document);

    // Defer the Ready transition one tick so the loading indicator actually
    // commits before the panels mount. Fires exactly once for the page's life.
    spawn_local(async {
        TimeoutFuture::new(0).await;
        state::dispatch_global_message(messages::Message::PageLoaded);
    });

    Ok(())
}
