//! Event log panel
//!
//! Renders captured events one per line, `[time] kind: field: value, ...`,
//! colored by event class. Follows the newest entry until the user scrolls
//! up; scrolling back to the bottom resumes following.

use super::scrollbar::render_scrollbar;
use crate::event_log::LogEntry;
use crate::tui::scroll::ScrollState;
use crate::tui::traits::{
    Component, ComponentId, Handled, Interactive, RenderContext, Scrollable, ScrollableInteractive,
};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

pub struct EventsPanel {
    scroll: ScrollState,
}

impl EventsPanel {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::new(),
        }
    }

    /// Sync with the log size (call each frame before render)
    pub fn sync(&mut self, entry_count: usize, viewport_height: usize) {
        self.scroll.update_dimensions(entry_count, viewport_height);
    }

    /// The log was cleared
    pub fn reset(&mut self) {
        self.scroll.reset();
    }

    pub fn render(&self, f: &mut Frame, area: Rect, entries: &[LogEntry], ctx: &RenderContext) {
        let theme = ctx.theme;

        let title = if self.is_auto_following() {
            format!(" Events ({}) ", entries.len())
        } else {
            format!(" Events ({}) [scroll] ", entries.len())
        };
        let block = self.block(title, ctx);

        if entries.is_empty() {
            let hint = Paragraph::new("Interact with the input to see its events")
                .style(Style::default().fg(theme.muted))
                .block(block);
            f.render_widget(hint, area);
            return;
        }

        let (start, end) = self.scroll.visible_range();
        let items: Vec<ListItem> = entries[start..end]
            .iter()
            .map(|entry| {
                let color = theme.event_class(entry.kind.class());
                // Control changes are not widget events; set them apart
                let kind_style = if entry.kind.is_synthetic() {
                    Style::default().fg(color).add_modifier(Modifier::ITALIC)
                } else {
                    Style::default().fg(color).add_modifier(Modifier::BOLD)
                };
                let summary = entry.summary();
                let mut spans = vec![
                    Span::styled(
                        format!("[{}] ", entry.display_time()),
                        Style::default().fg(theme.muted),
                    ),
                    Span::styled(format!("{}:", entry.kind), kind_style),
                ];
                if !summary.is_empty() {
                    spans.push(Span::styled(
                        format!(" {}", summary),
                        Style::default().fg(theme.foreground),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();

        f.render_widget(List::new(items).block(block), area);
        render_scrollbar(f, area, &self.scroll, theme.muted);
    }
}

impl Default for EventsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for EventsPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Events
    }
}

impl Scrollable for EventsPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Interactive for EventsPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        self.handle_scroll_keys(key)
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:scroll  c:clear  y:export  Y:export JSONL")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_scroll_keys_release_and_resume_follow() {
        let mut panel = EventsPanel::new();
        panel.sync(50, 10);
        assert!(panel.is_auto_following());

        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(panel.handle_key(up), Handled::Yes);
        assert!(!panel.is_auto_following());

        let end = KeyEvent::new(KeyCode::End, KeyModifiers::NONE);
        assert_eq!(panel.handle_key(end), Handled::Yes);
        assert!(panel.is_auto_following());
    }

    #[test]
    fn test_other_keys_bubble_up() {
        let mut panel = EventsPanel::new();
        let c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert_eq!(panel.handle_key(c), Handled::No);
    }
}
