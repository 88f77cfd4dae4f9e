//! Scrollable trait for components with scrollable content
//!
//! Components own a `ScrollState` and expose it here so key handling can be
//! shared (see `ScrollableInteractive`).

use super::Component;
use crate::tui::scroll::ScrollState;

pub trait Scrollable: Component {
    fn scroll_state(&self) -> &ScrollState;

    fn scroll_state_mut(&mut self) -> &mut ScrollState;

    /// Pinned to the newest content
    fn is_auto_following(&self) -> bool {
        self.scroll_state().auto_follow
    }
}
