//! Interactive trait for components that handle keyboard input
//!
//! The App routes keys to the focused component after its own global
//! bindings; unhandled keys bubble back up.

use super::{Component, Scrollable};
use crate::tui::scroll::ScrollState;
use crossterm::event::{KeyCode, KeyEvent};

/// Result of handling a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the component
    Yes,
    /// Event was not handled, should bubble up
    No,
}

/// Trait for components that handle keyboard input
pub trait Interactive: Component {
    /// Returns `Handled::Yes` if the component consumed the event
    fn handle_key(&mut self, key: KeyEvent) -> Handled;

    /// Keybind hints for the status bar when this component is focused
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}

/// Standard scroll keys for components that are both Interactive and Scrollable
pub trait ScrollableInteractive: Interactive + Scrollable {
    /// Up/k, Down/j, Home, End, PageUp, PageDown
    fn handle_scroll_keys(&mut self, key: KeyEvent) -> Handled {
        let action: fn(&mut ScrollState) = match key.code {
            KeyCode::Up | KeyCode::Char('k') => ScrollState::scroll_up,
            KeyCode::Down | KeyCode::Char('j') => ScrollState::scroll_down,
            KeyCode::Home => ScrollState::scroll_to_top,
            KeyCode::End => ScrollState::scroll_to_bottom,
            KeyCode::PageUp => ScrollState::page_up,
            KeyCode::PageDown => ScrollState::page_down,
            _ => return Handled::No,
        };
        action(self.scroll_state_mut());
        Handled::Yes
    }
}

impl<T: Interactive + Scrollable> ScrollableInteractive for T {}
