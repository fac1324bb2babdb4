//! Component contracts for the browser panels
//!
//! Each focusable panel owns its own state and key handling; the `App`
//! only routes input and commits whatever view-state changes a panel makes.
//!
//! ```text
//!                    App (routes keys, commits ViewState)
//!                              │
//!          ┌───────────────────┼───────────────────┐
//!          ▼                   ▼                   ▼
//!     SearchBar           FilterPanel          DoctorList
//!          └───────────── Interactive ─────────────┘
//! ```

use crate::directory::ViewState;
use crate::tui::theme::Theme;
use crossterm::event::KeyEvent;

/// Result of handling a key event
///
/// Tells the App whether the component consumed the event or
/// if it should bubble up for global handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the component
    Yes,
    /// Event was not handled, should bubble up
    No,
}

impl Handled {
    pub fn was_handled(self) -> bool {
        self == Self::Yes
    }
}

impl From<bool> for Handled {
    fn from(handled: bool) -> Self {
        if handled {
            Self::Yes
        } else {
            Self::No
        }
    }
}

/// Trait for panels that handle keyboard input
///
/// Panels may mutate the shared `ViewState`; the App compares it before
/// and after and commits the change to the location.
pub trait Interactive {
    /// Returns `Handled::Yes` if the panel consumed the event
    fn handle_key(&mut self, key: KeyEvent, view: &mut ViewState) -> Handled;

    /// Keybind hints shown in the status bar while focused
    fn focus_hint(&self) -> &'static str;
}

/// Immutable context passed to components during rendering
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub theme: &'a Theme,
    pub focused: bool,
    /// Animation frame counter (for the loading spinner)
    pub animation_frame: usize,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, focused: bool, animation_frame: usize) -> Self {
        Self {
            theme,
            focused,
            animation_frame,
        }
    }

    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[self.animation_frame % SPINNER.len()]
    }
}
