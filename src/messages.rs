// src/messages.rs
//
// The events that can occur in the UI, and the side effects the reducer may
// request. The reducer itself never touches the DOM; anything that does is a
// Command executed by the dispatcher after the state borrow is released.
//
use crate::models::Section;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Loading -> Ready transition, fired once right after first render.
    PageLoaded,

    /// Window scroll offset changed (px from top).
    ScrollChanged(f64),

    // Navigation
    ToggleMobileMenu,
    NavigateTo(Section),

    /// Hero role ticker fired.
    AdvanceRole,

    /// A panel's bounding box crossed the reveal threshold for the first time.
    SectionEnteredView(Section),
}

/// Side effects requested by the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Mount navigation and the four panels (runs once, after PageLoaded).
    MountPage,
    /// Smooth-scroll the viewport to a section anchor.
    ScrollIntoView(Section),
}
