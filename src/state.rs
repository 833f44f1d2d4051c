use std::cell::RefCell;

use wasm_bindgen::JsValue;

use crate::components::PageHandles;
use crate::constants::ROLES;
use crate::messages::{Command, Message};
use crate::models::Section;
use crate::update::update;

// Transient view-state for the lifetime of the rendered page. Nothing here is
// persisted; every field is recomputed or advanced by events.
pub struct AppState {
    /// Page root mount guard. False renders the loading indicator only;
    /// flips true exactly once and never reverts.
    pub is_loaded: bool,

    /// Pure function of the current scroll offset (> 20px threshold).
    pub is_scrolled: bool,

    /// Mobile menu open/closed flag. Closed again after any navigation.
    pub mobile_menu_open: bool,

    /// Index into ROLES, always in [0, ROLES.len()).
    pub role_index: usize,

    // One-shot reveal flags, monotone false -> true.
    pub skills_revealed: bool,
    pub projects_revealed: bool,
    pub contact_revealed: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            is_loaded: false,
            is_scrolled: false,
            mobile_menu_open: false,
            role_index: 0,
            skills_revealed: false,
            projects_revealed: false,
            contact_revealed: false,
        }
    }

    pub fn current_role(&self) -> &'static str {
        ROLES[self.role_index % ROLES.len()]
    }

    /// Whether a panel's entrance animation has been triggered.
    /// The hero reveals on mount, so About always reads as entered.
    pub fn has_entered_view(&self, section: Section) -> bool {
        match section {
            Section::About => true,
            Section::Skills => self.skills_revealed,
            Section::Projects => self.projects_revealed,
            Section::Contact => self.contact_revealed,
        }
    }

    /// One-shot: sets the reveal flag, never clears it.
    pub fn mark_entered(&mut self, section: Section) {
        match section {
            Section::About => {}
            Section::Skills => self.skills_revealed = true,
            Section::Projects => self.projects_revealed = true,
            Section::Contact => self.contact_revealed = true,
        }
    }

    /// Run the reducer for one message and collect requested side effects.
    pub fn dispatch(&mut self, msg: Message) -> Vec<Command> {
        update(self, msg)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// We use thread_local to store our app state
thread_local! {
    pub static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

// Subscriptions owned by the mounted page (scroll listener, hero ticker,
// intersection watchers). Dropping them releases every callback.
thread_local! {
    pub static PAGE: RefCell<Option<PageHandles>> = RefCell::new(None);
}

// Global helper function for dispatching messages with proper UI refresh
// handling. Commands run only after the mutable state borrow is released.
pub fn dispatch_global_message(msg: Message) {
    let commands = APP_STATE.with(|state| state.borrow_mut().dispatch(msg));

    for command in commands {
        execute_command(command);
    }

    if let Err(e) = refresh_ui() {
        web_sys::console::warn_1(&format!("Failed to refresh UI after action: {:?}", e).into());
    }
}

fn execute_command(command: Command) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => return,
    };

    match command {
        Command::MountPage => {
            if let Err(e) = crate::components::mount_page(&document) {
                web_sys::console::error_1(&format!("Failed to mount page: {:?}", e).into());
            }
        }
        Command::ScrollIntoView(section) => {
            // Missing anchors are a silent no-op.
            crate::dom_utils::scroll_to_anchor(&document, section.anchor_id());
        }
    }
}

/// Re-render everything that depends on the current state.
pub fn refresh_ui() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    APP_STATE.with(|state| crate::views::render_page(&state.borrow(), &document))
}

/// Reset global state to its initial value. Used by tests between scenarios.
pub fn reset_app_state() {
    APP_STATE.with(|state| *state.borrow_mut() = AppState::new());
}
