//! Hero panel: greeting, rotating role line, call-to-action buttons and
//! social links. Owns the role ticker; the Interval is cancelled when the
//! handle drops, so no tick can fire after teardown.

use gloo_timers::callback::Interval;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::{ROLES, ROLE_ROTATION_MS};
use crate::dom_utils;
use crate::messages::Message;
use crate::models::{Section, SOCIAL_LINKS};
use crate::state::dispatch_global_message;
use crate::subscriptions::EventListener;

pub struct HeroHandle {
    _ticker: Interval,
    _clicks: Vec<EventListener>,
}

pub fn mount(document: &Document, root: &Element) -> Result<HeroHandle, JsValue> {
    let section = document.create_element("section")?;
    section.set_id(Section::About.anchor_id());
    section.set_class_name("hero section");

    let badge = document.create_element("span")?;
    badge.set_class_name("badge");
    badge.set_text_content(Some("Welcome to my portfolio"));
    section.append_child(&badge)?;

    let heading = document.create_element("h1")?;
    heading.set_text_content(Some("Hi, I'm "));
    let name = document.create_element("span")?;
    name.set_class_name("hero-name");
    name.set_text_content(Some("Swarup Kumar"));
    heading.append_child(&name)?;
    section.append_child(&heading)?;

    // Rotating role line. The view layer swaps the text on every tick.
    let role = document.create_element("div")?;
    role.set_id("hero-role");
    role.set_class_name("hero-role");
    role.set_text_content(Some(ROLES[0]));
    section.append_child(&role)?;

    let intro = document.create_element("p")?;
    intro.set_text_content(Some(
        "Passionate about creating innovative solutions at the intersection of full-stack \
         development and machine learning. I love building scalable applications and \
         exploring the frontiers of AI.",
    ));
    section.append_child(&intro)?;

    let mut clicks = Vec::new();

    // Call-to-action buttons jump to the projects and contact anchors.
    let cta_row = document.create_element("div")?;
    cta_row.set_class_name("cta-row");

    let work_btn = document.create_element("button")?;
    work_btn.set_text_content(Some("View My Work \u{2193}"));
    clicks.push(cta_click(&work_btn, Section::Projects)?);
    cta_row.append_child(&work_btn)?;

    let contact_btn = document.create_element("button")?;
    contact_btn.set_class_name("outline");
    contact_btn.set_text_content(Some("Contact Me \u{2709}"));
    clicks.push(cta_click(&contact_btn, Section::Contact)?);
    cta_row.append_child(&contact_btn)?;

    section.append_child(&cta_row)?;

    let social_row = document.create_element("div")?;
    social_row.set_class_name("social-row");
    for (icon, href) in SOCIAL_LINKS {
        let link = document.create_element("a")?;
        link.set_attribute("href", href)?;
        if !href.starts_with("mailto:") {
            link.set_attribute("target", "_blank")?;
            link.set_attribute("rel", "noopener noreferrer")?;
        }
        link.set_text_content(Some(icon));
        social_row.append_child(&link)?;
    }
    section.append_child(&social_row)?;

    let hint = document.create_element("div")?;
    hint.set_class_name("scroll-hint");
    hint.set_text_content(Some("\u{2193}"));
    section.append_child(&hint)?;

    root.append_child(&section)?;

    // The hero fades in on mount rather than on viewport entry.
    dom_utils::reveal(&section);

    let ticker = Interval::new(ROLE_ROTATION_MS, || {
        dispatch_global_message(Message::AdvanceRole);
    });

    Ok(HeroHandle {
        _ticker: ticker,
        _clicks: clicks,
    })
}

fn cta_click(el: &Element, section: Section) -> Result<EventListener, JsValue> {
    EventListener::new(el.as_ref(), "click", move |_| {
        dispatch_global_message(Message::NavigateTo(section));
    })
}
