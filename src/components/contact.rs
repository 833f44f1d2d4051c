//! Contact panel: fixed list of contact links plus the footer line. External
//! profile links open in a new browsing context; the mail link stays in the
//! current one.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::{CARD_STAGGER_MS, REVEAL_THRESHOLD};
use crate::messages::Message;
use crate::models::{Section, CONTACT_METHODS};
use crate::state::dispatch_global_message;
use crate::subscriptions::IntersectionWatcher;

pub struct ContactHandle {
    _watcher: IntersectionWatcher,
}

pub fn mount(document: &Document, root: &Element) -> Result<ContactHandle, JsValue> {
    let section = document.create_element("section")?;
    section.set_id(Section::Contact.anchor_id());
    section.set_class_name("section contact");

    let heading = document.create_element("h2")?;
    heading.set_class_name("reveal-item");
    heading.set_text_content(Some("Let's Connect"));
    section.append_child(&heading)?;

    let pitch = document.create_element("p")?;
    pitch.set_class_name("reveal-item");
    pitch.set_text_content(Some(
        "I'm always interested in hearing about new opportunities and exciting projects. \
         Feel free to reach out if you'd like to collaborate or just have a chat!",
    ));
    section.append_child(&pitch)?;

    let links = document.create_element("div")?;
    links.set_class_name("contact-links");
    for (i, method) in CONTACT_METHODS.iter().enumerate() {
        let link = document.create_element("a")?;
        link.set_class_name("contact-link reveal-item");
        link.set_attribute("href", method.href)?;
        link.set_attribute(
            "style",
            &format!(
                "--accent:{};transition-delay:{}ms",
                method.accent,
                i as u32 * CARD_STAGGER_MS
            ),
        )?;
        if method.opens_new_context() {
            link.set_attribute("target", "_blank")?;
            link.set_attribute("rel", "noopener noreferrer")?;
        }
        link.set_text_content(Some(&format!("{} {}", method.icon, method.label)));
        links.append_child(&link)?;
    }
    section.append_child(&links)?;

    let footer = document.create_element("p")?;
    footer.set_class_name("footer-note reveal-item");
    footer.set_text_content(Some(
        "\u{00A9} 2024 Swarup Kumar. Built with passion and lots of coffee \u{2615}",
    ));
    section.append_child(&footer)?;

    root.append_child(&section)?;

    let watcher = IntersectionWatcher::once(&section, REVEAL_THRESHOLD, || {
        dispatch_global_message(Message::SectionEnteredView(Section::Contact));
    })?;

    Ok(ContactHandle { _watcher: watcher })
}
