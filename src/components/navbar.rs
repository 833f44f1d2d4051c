//! Fixed navigation bar: brand mark, one link per section, theme toggle and
//! the collapsible mobile menu. Owns the page-wide scroll subscription; the
//! scrolled/unscrolled styling itself is applied by the view layer.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::messages::Message;
use crate::models::Section;
use crate::state::dispatch_global_message;
use crate::subscriptions::EventListener;
use crate::theme;

pub struct NavbarHandle {
    _scroll: EventListener,
    _clicks: Vec<EventListener>,
}

pub fn mount(document: &Document, root: &Element) -> Result<NavbarHandle, JsValue> {
    let nav = document.create_element("nav")?;
    nav.set_id("navbar");
    nav.set_class_name("navbar");

    let inner = document.create_element("div")?;
    inner.set_class_name("navbar-inner");

    let mut clicks = Vec::new();

    // Brand mark scrolls back to the top.
    let brand = document.create_element("div")?;
    brand.set_class_name("nav-brand");
    brand.set_text_content(Some("SK"));
    clicks.push(nav_click(&brand, Section::About)?);
    inner.append_child(&brand)?;

    // Desktop links.
    let links = document.create_element("div")?;
    links.set_class_name("nav-links");
    for section in Section::ALL {
        let button = document.create_element("button")?;
        button.set_text_content(Some(section.nav_label()));
        clicks.push(nav_click(&button, section)?);
        links.append_child(&button)?;
    }
    inner.append_child(&links)?;

    // Theme toggle and mobile menu button.
    let controls = document.create_element("div")?;
    controls.set_class_name("nav-controls");

    let theme_btn = document.create_element("button")?;
    theme_btn.set_id("theme-toggle");
    theme_btn.set_text_content(Some("\u{263E}"));
    clicks.push(EventListener::new(theme_btn.as_ref(), "click", move |_| {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            theme::toggle(&doc);
        }
    })?);
    controls.append_child(&theme_btn)?;

    let menu_btn = document.create_element("button")?;
    menu_btn.set_id("mobile-menu-toggle");
    menu_btn.set_text_content(Some("\u{2630}"));
    clicks.push(EventListener::new(menu_btn.as_ref(), "click", move |_| {
        dispatch_global_message(Message::ToggleMobileMenu);
    })?);
    controls.append_child(&menu_btn)?;

    inner.append_child(&controls)?;
    nav.append_child(&inner)?;

    // Collapsible mobile menu, closed initially. Navigating from it closes
    // it again (handled in the reducer).
    let menu = document.create_element("div")?;
    menu.set_id("mobile-menu");
    menu.set_class_name("mobile-menu hidden");
    for section in Section::ALL {
        let button = document.create_element("button")?;
        button.set_text_content(Some(section.nav_label()));
        clicks.push(nav_click(&button, section)?);
        menu.append_child(&button)?;
    }
    nav.append_child(&menu)?;

    root.append_child(&nav)?;

    // Page-wide scroll signal, acquired here and released when the handle
    // drops. isScrolled stays a pure function of the offset.
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let win = window.clone();
    let scroll = EventListener::new(window.as_ref(), "scroll", move |_| {
        let offset = win.scroll_y().unwrap_or(0.0);
        dispatch_global_message(Message::ScrollChanged(offset));
    })?;

    Ok(NavbarHandle {
        _scroll: scroll,
        _clicks: clicks,
    })
}

fn nav_click(el: &Element, section: Section) -> Result<EventListener, JsValue> {
    EventListener::new(el.as_ref(), "click", move |_| {
        dispatch_global_message(Message::NavigateTo(section));
    })
}
