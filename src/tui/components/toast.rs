//! Toast notification component
//!
//! A non-blocking overlay that auto-dismisses. Renders in the bottom-right
//! corner on top of all other content.

use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// A toast notification that auto-dismisses
pub struct Toast {
    pub message: String,
    created_at: Instant,
    duration: Duration,
}

impl Toast {
    /// Create a new toast with default 2-second duration
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
            duration: Duration::from_secs(2),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }

    /// Render the toast in the bottom-right corner
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let toast_area = placement(area, self.message.width() as u16);

        let paragraph = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.foreground))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(theme.border_type)
                    .border_style(Style::default().fg(theme.highlight))
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(Clear, toast_area);
        f.render_widget(paragraph, toast_area);
    }
}

/// Bottom-right box for a message `text_width` columns wide, clear of the
/// status bar, padded one column each side inside the border
fn placement(area: Rect, text_width: u16) -> Rect {
    const HEIGHT: u16 = 3;
    let width = (text_width + 4).min(area.width.saturating_sub(4));
    Rect::new(
        area.right().saturating_sub(width + 2),
        area.bottom().saturating_sub(HEIGHT + 2),
        width,
        HEIGHT,
    )
}
