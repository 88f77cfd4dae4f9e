//! Scrollbar drawn on the right border of the scrolling panels

use crate::tui::scroll::ScrollState;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Thumb-only scrollbar, drawn only while content overflows the viewport
pub fn render_scrollbar(f: &mut Frame, area: Rect, scroll: &ScrollState, color: Color) {
    if !scroll.needs_scrollbar() {
        return;
    }

    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .begin_symbol(None)
        .end_symbol(None)
        .thumb_style(Style::default().fg(color));

    // Positions run over the scrollable distance, not the item count
    let scrollable = scroll.total().saturating_sub(scroll.viewport());
    let mut state = ScrollbarState::new(scrollable).position(scroll.offset());

    f.render_stateful_widget(scrollbar, area, &mut state);
}
