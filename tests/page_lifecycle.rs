//! Browser tests for the page mount lifecycle: the Loading -> Ready
//! transition, the fixed section order, missing-anchor navigation, and the
//! hero ticker being silenced by teardown.
//!
//! Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::*;
use web_sys::Document;

use portfolio_frontend::components;
use portfolio_frontend::dom_utils;
use portfolio_frontend::messages::Message;
use portfolio_frontend::state::{self, APP_STATE};
use portfolio_frontend::views;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Mount a fresh page the same way `start()` does, minus the deferred tick.
fn mount_fresh_page(document: &Document) {
    views::ensure_page_styles(document).expect("styles inject");
    views::render_loading(document).expect("loading indicator renders");
    state::dispatch_global_message(Message::PageLoaded);
}

/// Remove everything a test mounted so the next one starts clean.
fn teardown(document: &Document) {
    components::unmount_page();
    if let Some(container) = document.get_element_by_id("app-container") {
        container.remove();
    }
    state::reset_app_state();
}

#[wasm_bindgen_test]
fn page_mounts_sections_once_each_in_order() {
    let document = document();
    teardown(&document);

    mount_fresh_page(&document);

    let is_loaded = APP_STATE.with(|s| s.borrow().is_loaded);
    assert!(is_loaded, "PageLoaded flips the mount guard");
    assert!(
        document.get_element_by_id("loading-overlay").is_none(),
        "loading indicator is gone once Ready"
    );

    // Each anchor exists exactly once.
    for id in ["about", "skills", "projects", "contact"] {
        let count = document
            .query_selector_all(&format!("[id='{}']", id))
            .unwrap()
            .length();
        assert_eq!(count, 1, "anchor '{}' must exist exactly once", id);
    }

    // And in fixed vertical order under the app container.
    let container = document.get_element_by_id("app-container").unwrap();
    let children = container.children();
    let mut section_ids = Vec::new();
    for i in 0..children.length() {
        let child = children.item(i).unwrap();
        if child.tag_name().eq_ignore_ascii_case("section") {
            section_ids.push(child.id());
        }
    }
    assert_eq!(section_ids, vec!["about", "skills", "projects", "contact"]);

    teardown(&document);
}

#[wasm_bindgen_test]
fn missing_anchor_navigation_is_a_noop() {
    let document = document();
    teardown(&document);

    // Directly: looking up a nonexistent anchor must not throw.
    dom_utils::scroll_to_anchor(&document, "nonexistent-id");

    // Through the dispatcher: navigation still closes an open mobile menu
    // and leaves the rest of the state alone, mounted page or not.
    state::dispatch_global_message(Message::ToggleMobileMenu);
    let open = APP_STATE.with(|s| s.borrow().mobile_menu_open);
    assert!(open);

    state::dispatch_global_message(Message::NavigateTo(
        portfolio_frontend::models::Section::Contact,
    ));
    APP_STATE.with(|s| {
        let s = s.borrow();
        assert!(!s.mobile_menu_open, "navigation closes the mobile menu");
        assert_eq!(s.role_index, 0);
        assert!(!s.skills_revealed);
    });

    teardown(&document);
}

#[wasm_bindgen_test]
async fn hero_ticker_stops_after_unmount() {
    let document = document();
    teardown(&document);

    mount_fresh_page(&document);

    // While mounted the ticker advances the role index.
    TimeoutFuture::new(3_300).await;
    let while_mounted = APP_STATE.with(|s| s.borrow().role_index);
    assert!(while_mounted >= 1, "ticker advances the role while mounted");

    // Dropping the page handles cancels the Interval; no further updates.
    components::unmount_page();
    let at_unmount = APP_STATE.with(|s| s.borrow().role_index);
    TimeoutFuture::new(3_300).await;
    let after_wait = APP_STATE.with(|s| s.borrow().role_index);
    assert_eq!(
        at_unmount, after_wait,
        "no role updates may occur after teardown"
    );

    teardown(&document);
}
