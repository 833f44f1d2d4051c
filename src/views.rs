// src/views.rs
//
// Maps the current AppState onto the DOM. Rendering is a pure function of
// state: these functions only read state and apply classes/text, they never
// dispatch messages. Every lookup is guarded so a render that races a
// teardown is a no-op.
//
use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::dom_utils::{hide, replay_animation, reveal, show};
use crate::models::Section;
use crate::state::AppState;

/// Render everything that depends on the current state. While the page root
/// is still Loading, the loading indicator is the only thing on screen and
/// there is nothing to update.
pub fn render_page(state: &AppState, document: &Document) -> Result<(), JsValue> {
    if !state.is_loaded {
        return Ok(());
    }

    render_navbar(state, document);
    render_hero_role(state, document);
    render_reveals(state, document);

    Ok(())
}

fn render_navbar(state: &AppState, document: &Document) {
    if let Some(navbar) = document.get_element_by_id("navbar") {
        if state.is_scrolled {
            let _ = navbar.class_list().add_1("navbar-scrolled");
        } else {
            let _ = navbar.class_list().remove_1("navbar-scrolled");
        }
    }

    if let Some(menu) = document.get_element_by_id("mobile-menu") {
        if state.mobile_menu_open {
            show(&menu);
        } else {
            hide(&menu);
        }
    }
}

fn render_hero_role(state: &AppState, document: &Document) {
    if let Some(role_el) = document.get_element_by_id("hero-role") {
        let role = state.current_role();
        // Only swap (and replay the transition) when the text actually changed.
        if role_el.text_content().as_deref() != Some(role) {
            role_el.set_text_content(Some(role));
            replay_animation(&role_el, "role-swap");
        }
    }
}

fn render_reveals(state: &AppState, document: &Document) {
    for section in [Section::Skills, Section::Projects, Section::Contact] {
        if state.has_entered_view(section) {
            if let Some(el) = document.get_element_by_id(section.anchor_id()) {
                // One-shot: the class is only ever added, never removed.
                reveal(&el);
            }
        }
    }
}

/// Build the app container with the loading indicator shown exclusively.
pub fn render_loading(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id("app-container").is_some() {
        return Ok(());
    }

    let container = document.create_element("div")?;
    container.set_id("app-container");

    let overlay = document.create_element("div")?;
    overlay.set_id("loading-overlay");
    overlay.set_class_name("loading-overlay");

    let spinner = document.create_element("div")?;
    spinner.set_class_name("spinner");
    overlay.append_child(&spinner)?;

    container.append_child(&overlay)?;

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("No body found"))?;
    body.append_child(&container)?;

    Ok(())
}

/// Inject the page stylesheet once. All state-dependent styling works by
/// class toggles against these rules.
pub fn ensure_page_styles(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id("page-styles").is_some() {
        return Ok(());
    }

    let css = "
body{margin:0;font-family:Arial,Helvetica,sans-serif;background:#fafafa;color:#111}
.dark body,:root.dark body{background:#111;color:#eee}
.hidden{display:none}
.visible{display:block}
.loading-overlay{min-height:100vh;display:flex;align-items:center;justify-content:center}
.spinner{width:8rem;height:8rem;border-radius:50%;border:2px solid transparent;border-bottom-color:#2563eb;animation:spin 1s linear infinite}
@keyframes spin{to{transform:rotate(360deg)}}
.navbar{position:fixed;top:0;left:0;right:0;z-index:50;padding:0 1rem;background:transparent;transition:background .3s,box-shadow .3s}
.navbar-scrolled{background:rgba(250,250,250,.85);backdrop-filter:blur(8px);box-shadow:0 2px 8px rgba(0,0,0,.08);border-bottom:1px solid rgba(0,0,0,.06)}
.navbar-inner{max-width:72rem;margin:0 auto;display:flex;justify-content:space-between;align-items:center;height:4rem}
.nav-brand{font-size:1.25rem;font-weight:700;cursor:pointer}
.nav-links button{background:none;border:none;cursor:pointer;text-transform:capitalize;margin-left:2rem;color:inherit}
.mobile-menu{padding:1rem 0;border-top:1px solid rgba(0,0,0,.1)}
.mobile-menu button{display:block;width:100%;text-align:left;background:none;border:none;padding:.5rem 0;cursor:pointer;text-transform:capitalize;color:inherit}
.section{padding:5rem 1rem;max-width:72rem;margin:0 auto}
.hero{min-height:100vh;display:flex;flex-direction:column;align-items:center;justify-content:center;text-align:center}
.hero-role{height:2rem;font-size:1.5rem;color:#666}
.role-swap{animation:role-in .5s ease}
@keyframes role-in{from{opacity:0;transform:translateY(20px)}to{opacity:1;transform:translateY(0)}}
.reveal-item{opacity:0;transform:translateY(30px);transition:opacity .8s,transform .8s}
.is-visible .reveal-item{opacity:1;transform:translateY(0)}
.is-visible.reveal-item{opacity:1;transform:translateY(0)}
.card-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(18rem,1fr));gap:2rem}
.card{border-radius:.75rem;padding:1.5rem;background:#fff;box-shadow:0 1px 4px rgba(0,0,0,.08);transition:box-shadow .3s,transform .3s}
.card:hover{box-shadow:0 8px 24px rgba(0,0,0,.15);transform:translateY(-4px)}
.card img{width:100%;height:10rem;object-fit:cover;border-radius:.5rem}
.badge{display:inline-block;font-size:.75rem;padding:.2rem .6rem;margin:.15rem;border:1px solid rgba(37,99,235,.25);border-radius:999px;background:rgba(37,99,235,.06)}
.cta-row{display:flex;gap:1rem;justify-content:center;flex-wrap:wrap;margin:2rem 0}
.cta-row button{padding:.75rem 2rem;border-radius:.5rem;border:1px solid #2563eb;background:#2563eb;color:#fff;cursor:pointer;font-size:1rem}
.cta-row button.outline{background:transparent;color:inherit}
.social-row{display:flex;gap:1.5rem;justify-content:center}
.social-row a{text-decoration:none;font-size:1.5rem}
.contact-links{display:flex;gap:1rem;justify-content:center;flex-wrap:wrap;margin-bottom:3rem}
.contact-link{display:inline-block;padding:.75rem 2rem;border-radius:.5rem;border:1px solid var(--accent,#2563eb);text-decoration:none;color:inherit}
.footer-note{color:#888;font-size:.9rem}
";

    let style = document.create_element("style")?;
    style.set_id("page-styles");
    style.set_text_content(Some(css));

    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("No body found"))?;
    body.append_child(&style)?;

    Ok(())
}
