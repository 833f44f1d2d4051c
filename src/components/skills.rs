//! Skills panel: grouped skill cards revealed once the section scrolls into
//! the viewport. Cards and their tag badges carry staggered transition
//! delays; the actual trigger is the one-shot intersection watcher.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::{BADGE_BASE_DELAY_MS, BADGE_STAGGER_MS, CARD_STAGGER_MS, REVEAL_THRESHOLD};
use crate::dom_utils::set_stagger_delay;
use crate::messages::Message;
use crate::models::{Section, SKILL_GROUPS};
use crate::state::dispatch_global_message;
use crate::subscriptions::IntersectionWatcher;

pub struct SkillsHandle {
    _watcher: IntersectionWatcher,
}

pub fn mount(document: &Document, root: &Element) -> Result<SkillsHandle, JsValue> {
    let section = document.create_element("section")?;
    section.set_id(Section::Skills.anchor_id());
    section.set_class_name("section");

    let heading = document.create_element("h2")?;
    heading.set_class_name("reveal-item");
    heading.set_text_content(Some("Skills & Expertise"));
    section.append_child(&heading)?;

    let subtitle = document.create_element("p")?;
    subtitle.set_class_name("reveal-item");
    subtitle.set_text_content(Some(
        "A comprehensive skill set spanning full-stack development, programming languages, \
         and machine learning",
    ));
    section.append_child(&subtitle)?;

    let grid = document.create_element("div")?;
    grid.set_class_name("card-grid");

    for (i, group) in SKILL_GROUPS.iter().enumerate() {
        let card = document.create_element("div")?;
        card.set_class_name("card reveal-item");
        set_stagger_delay(&card, i as u32 * CARD_STAGGER_MS);

        let image = document.create_element("img")?;
        image.set_attribute("src", group.image_path)?;
        image.set_attribute("alt", group.category)?;
        card.append_child(&image)?;

        let title = document.create_element("h3")?;
        title.set_text_content(Some(&format!("{} {}", group.icon, group.category)));
        card.append_child(&title)?;

        let description = document.create_element("p")?;
        description.set_text_content(Some(group.description));
        card.append_child(&description)?;

        let badges = document.create_element("div")?;
        badges.set_class_name("badge-row");
        for (j, item) in group.items.iter().enumerate() {
            let badge = document.create_element("span")?;
            badge.set_class_name("badge reveal-item");
            set_stagger_delay(&badge, BADGE_BASE_DELAY_MS + j as u32 * BADGE_STAGGER_MS);
            badge.set_text_content(Some(item));
            badges.append_child(&badge)?;
        }
        card.append_child(&badges)?;

        grid.append_child(&card)?;
    }

    section.append_child(&grid)?;
    root.append_child(&section)?;

    let watcher = IntersectionWatcher::once(&section, REVEAL_THRESHOLD, || {
        dispatch_global_message(Message::SectionEnteredView(Section::Skills));
    })?;

    Ok(SkillsHandle { _watcher: watcher })
}
