pub mod contact;
pub mod hero;
pub mod navbar;
pub mod projects;
pub mod skills;

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::state;

/// Everything the mounted page owns. Dropping this releases the scroll
/// listener, the hero role ticker and every intersection watcher, so no
/// callback can fire against a torn-down page.
pub struct PageHandles {
    _navbar: navbar::NavbarHandle,
    _hero: hero::HeroHandle,
    _skills: skills::SkillsHandle,
    _projects: projects::ProjectsHandle,
    _contact: contact::ContactHandle,
}

/// Mount navigation and the four panels in fixed vertical order. Runs once;
/// a second call while the page is mounted is a no-op.
pub fn mount_page(document: &Document) -> Result<(), JsValue> {
    if state::PAGE.with(|page| page.borrow().is_some()) {
        return Ok(());
    }

    if let Some(overlay) = document.get_element_by_id("loading-overlay") {
        overlay.remove();
    }

    let root = app_container(document)?;

    let navbar = navbar::mount(document, &root)?;
    let hero = hero::mount(document, &root)?;
    let skills = skills::mount(document, &root)?;
    let projects = projects::mount(document, &root)?;
    let contact = contact::mount(document, &root)?;

    state::PAGE.with(|page| {
        *page.borrow_mut() = Some(PageHandles {
            _navbar: navbar,
            _hero: hero,
            _skills: skills,
            _projects: projects,
            _contact: contact,
        });
    });

    Ok(())
}

/// Tear down the page's subscriptions. The rendered DOM is left in place;
/// dangling callbacks are what must not survive.
pub fn unmount_page() {
    state::PAGE.with(|page| {
        page.borrow_mut().take();
    });
}

fn app_container(document: &Document) -> Result<Element, JsValue> {
    if let Some(el) = document.get_element_by_id("app-container") {
        return Ok(el);
    }
    let container = document.create_element("div")?;
    container.set_id("app-container");
    document
        .body()
        .ok_or_else(|| JsValue::from_str("No body found"))?
        .append_child(&container)?;
    Ok(container)
}
