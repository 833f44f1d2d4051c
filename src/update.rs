// src/update.rs
//
// Pure reducer: folds one Message into AppState and returns the side effects
// the dispatcher should run. No DOM access here, which keeps every state
// invariant testable on the host target.
//
use crate::constants::{ROLES, SCROLL_THRESHOLD_PX};
use crate::messages::{Command, Message};
use crate::state::AppState;

pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    match msg {
        Message::PageLoaded => {
            // Loading -> Ready fires exactly once; Ready is terminal.
            if !state.is_loaded {
                state.is_loaded = true;
                commands.push(Command::MountPage);
            }
        }

        Message::ScrollChanged(offset) => {
            state.is_scrolled = offset > SCROLL_THRESHOLD_PX;
        }

        Message::ToggleMobileMenu => {
            state.mobile_menu_open = !state.mobile_menu_open;
        }

        Message::NavigateTo(section) => {
            // Navigating from the open mobile menu also closes it.
            state.mobile_menu_open = false;
            commands.push(Command::ScrollIntoView(section));
        }

        Message::AdvanceRole => {
            state.role_index = (state.role_index + 1) % ROLES.len();
        }

        Message::SectionEnteredView(section) => {
            state.mark_entered(section);
        }
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Section;

    #[test]
    fn scroll_state_is_pure_function_of_offset() {
        let mut state = AppState::new();
        for (offset, expected) in [
            (0.0, false),
            (19.0, false),
            (20.0, false),
            (21.0, true),
            (1000.0, true),
        ] {
            update(&mut state, Message::ScrollChanged(offset));
            assert_eq!(state.is_scrolled, expected, "offset {}", offset);
        }
    }

    #[test]
    fn role_index_wraps_modulo_role_count() {
        let n = ROLES.len();
        let mut state = AppState::new();
        for k in 0..(2 * n) {
            assert_eq!(state.role_index, k % n, "after {} ticks", k);
            update(&mut state, Message::AdvanceRole);
        }
        assert_eq!(state.role_index, 0);
    }

    #[test]
    fn reveal_is_one_shot_and_monotone() {
        let mut state = AppState::new();
        for section in [Section::Skills, Section::Projects, Section::Contact] {
            assert!(!state.has_entered_view(section));
            update(&mut state, Message::SectionEnteredView(section));
            assert!(state.has_entered_view(section));
            // Scrolling back out must not re-arm the reveal.
            update(&mut state, Message::SectionEnteredView(section));
            assert!(state.has_entered_view(section));
        }
    }

    #[test]
    fn navigation_closes_menu_and_touches_nothing_else() {
        let mut state = AppState::new();
        state.is_loaded = true;
        state.is_scrolled = true;
        state.mobile_menu_open = true;
        state.role_index = 2;
        state.skills_revealed = true;

        let commands = update(&mut state, Message::NavigateTo(Section::Contact));

        assert_eq!(commands, vec![Command::ScrollIntoView(Section::Contact)]);
        assert!(!state.mobile_menu_open);
        assert!(state.is_loaded);
        assert!(state.is_scrolled);
        assert_eq!(state.role_index, 2);
        assert!(state.skills_revealed);
    }

    #[test]
    fn mobile_menu_toggle_is_an_idempotent_pair() {
        let mut state = AppState::new();
        let original = state.mobile_menu_open;
        update(&mut state, Message::ToggleMobileMenu);
        assert_eq!(state.mobile_menu_open, !original);
        update(&mut state, Message::ToggleMobileMenu);
        assert_eq!(state.mobile_menu_open, original);
    }

    #[test]
    fn page_loaded_transition_fires_exactly_once() {
        let mut state = AppState::new();
        assert_eq!(
            update(&mut state, Message::PageLoaded),
            vec![Command::MountPage]
        );
        assert!(state.is_loaded);
        // Ready is terminal: a second PageLoaded is a no-op.
        assert!(update(&mut state, Message::PageLoaded).is_empty());
        assert!(state.is_loaded);
    }
}
