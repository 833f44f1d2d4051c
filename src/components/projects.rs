//! Projects panel: static project cards with independently staggered feature
//! and technology badges, revealed by the same one-shot viewport trigger as
//! the skills panel. No network fetch; every entry is fixed configuration.

use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::{
    BADGE_BASE_DELAY_MS, BADGE_STAGGER_MS, CARD_STAGGER_MS, REVEAL_THRESHOLD, TECH_BASE_DELAY_MS,
};
use crate::dom_utils::set_stagger_delay;
use crate::messages::Message;
use crate::models::{ProjectEntry, Section, PROJECTS};
use crate::state::dispatch_global_message;
use crate::subscriptions::IntersectionWatcher;

pub struct ProjectsHandle {
    _watcher: IntersectionWatcher,
}

pub fn mount(document: &Document, root: &Element) -> Result<ProjectsHandle, JsValue> {
    let section = document.create_element("section")?;
    section.set_id(Section::Projects.anchor_id());
    section.set_class_name("section");

    let heading = document.create_element("h2")?;
    heading.set_class_name("reveal-item");
    heading.set_text_content(Some("Featured Projects"));
    section.append_child(&heading)?;

    let subtitle = document.create_element("p")?;
    subtitle.set_class_name("reveal-item");
    subtitle.set_text_content(Some(
        "A selection of my recent work showcasing full-stack development and machine \
         learning capabilities",
    ));
    section.append_child(&subtitle)?;

    let grid = document.create_element("div")?;
    grid.set_class_name("card-grid");
    for (i, project) in PROJECTS.iter().enumerate() {
        grid.append_child(&project_card(document, i, project)?.into())?;
    }
    section.append_child(&grid)?;

    let more = document.create_element("button")?;
    more.set_class_name("outline reveal-item");
    more.set_text_content(Some("View All Projects \u{2197}"));
    section.append_child(&more)?;

    root.append_child(&section)?;

    let watcher = IntersectionWatcher::once(&section, REVEAL_THRESHOLD, || {
        dispatch_global_message(Message::SectionEnteredView(Section::Projects));
    })?;

    Ok(ProjectsHandle { _watcher: watcher })
}

fn project_card(document: &Document, index: usize, project: &ProjectEntry) -> Result<Element, JsValue> {
    let card = document.create_element("div")?;
    card.set_class_name("card reveal-item");
    set_stagger_delay(&card, index as u32 * CARD_STAGGER_MS);

    let icon = document.create_element("span")?;
    icon.set_class_name("project-icon");
    icon.set_text_content(Some(project.icon));
    card.append_child(&icon)?;

    let title_row = document.create_element("div")?;
    title_row.set_class_name("project-title-row");

    let title = document.create_element("h3")?;
    title.set_text_content(Some(project.title));
    title_row.append_child(&title)?;

    let link = document.create_element("a")?;
    link.set_class_name("project-link");
    link.set_attribute("href", project.link)?;
    link.set_text_content(Some("\u{2197}"));
    title_row.append_child(&link)?;

    card.append_child(&title_row)?;

    let description = document.create_element("p")?;
    description.set_text_content(Some(project.description));
    card.append_child(&description)?;

    // Feature and technology badges stagger on independent timelines.
    card.append_child(&badge_block(
        document,
        "Key Features:",
        project.features,
        BADGE_BASE_DELAY_MS,
    )?.into())?;
    card.append_child(&badge_block(
        document,
        "Technologies:",
        project.tech,
        TECH_BASE_DELAY_MS,
    )?.into())?;

    Ok(card)
}

fn badge_block(
    document: &Document,
    label: &str,
    items: &[&str],
    base_delay_ms: u32,
) -> Result<Element, JsValue> {
    let block = document.create_element("div")?;

    let heading = document.create_element("h4")?;
    heading.set_text_content(Some(label));
    block.append_child(&heading)?;

    let row = document.create_element("div")?;
    row.set_class_name("badge-row");
    for (i, item) in items.iter().enumerate() {
        let badge = document.create_element("span")?;
        badge.set_class_name("badge reveal-item");
        set_stagger_delay(&badge, base_delay_ms + i as u32 * BADGE_STAGGER_MS);
        badge.set_text_content(Some(item));
        row.append_child(&badge)?;
    }
    block.append_child(&row)?;

    Ok(block)
}
