//! System logs panel
//!
//! Shows the application's own diagnostics captured by `TuiLogLayer`,
//! color-coded by level. Entries are synced from the shared `LogBuffer`
//! each frame; selection enables copying a single record.

use super::scrollbar::render_scrollbar;
use crate::logging::{LogLevel, LogRecord};
use crate::theme::Theme;
use crate::tui::scroll::ScrollState;
use crate::tui::traits::{
    Component, ComponentId, Copyable, Handled, Interactive, RenderContext, Scrollable,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem},
    Frame,
};

pub struct LogsPanel {
    scroll: ScrollState,

    /// Selected record index (None = auto-follow mode)
    pub selected: Option<usize>,

    /// Records as of the last sync
    entries: Vec<LogRecord>,
}

impl LogsPanel {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::new(),
            selected: None,
            entries: Vec::new(),
        }
    }

    /// Update with current log records (call each frame)
    pub fn sync_entries(&mut self, entries: Vec<LogRecord>, viewport_height: usize) {
        self.scroll.update_dimensions(entries.len(), viewport_height);

        if let Some(idx) = self.selected {
            if idx >= entries.len() {
                self.selected = entries.len().checked_sub(1);
            }
        }
        self.entries = entries;
    }

    pub fn render(&self, f: &mut Frame, area: Rect, ctx: &RenderContext) {
        let theme = ctx.theme;
        let focused = ctx.is_focused(self.id());
        let (start, end) = self.scroll.visible_range();

        let items: Vec<ListItem> = self.entries[start..end]
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let style = if focused && self.selected == Some(start + i) {
                    Style::default()
                        .fg(theme.selection_fg)
                        .bg(theme.selection)
                        .add_modifier(Modifier::BOLD)
                } else {
                    log_level_style(&entry.level, theme)
                };
                ListItem::new(format_record(entry)).style(style)
            })
            .collect();

        let title = if self.selected.is_some() && focused {
            " System Logs [select] "
        } else if self.is_auto_following() {
            " System Logs "
        } else {
            " System Logs [scroll] "
        };

        f.render_widget(List::new(items).block(self.block(title.to_string(), ctx)), area);
        render_scrollbar(f, area, &self.scroll, theme.muted);
    }

    fn selected_record(&self) -> Option<&LogRecord> {
        self.selected.and_then(|idx| self.entries.get(idx))
    }

    fn select(&mut self, index: usize) {
        self.selected = Some(index.min(self.entries.len().saturating_sub(1)));
    }

    /// Move the selection by `delta`; the first move starts at the newest record
    fn step_selection(&mut self, delta: isize) {
        let Some(last) = self.entries.len().checked_sub(1) else {
            return;
        };
        match self.selected {
            None => self.select(last),
            Some(idx) => {
                let next = idx.saturating_add_signed(delta).min(last);
                if next < self.scroll.offset() {
                    self.scroll.scroll_up();
                } else if next >= self.scroll.offset() + self.scroll.viewport() {
                    self.scroll.scroll_down();
                }
                self.select(next);
            }
        }
    }
}

impl Default for LogsPanel {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait Implementations
// ═══════════════════════════════════════════════════════════════════════════

impl Component for LogsPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Logs
    }
}

impl Scrollable for LogsPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Copyable for LogsPanel {
    fn copy_text(&self) -> Option<String> {
        self.selected_record().map(format_record)
    }

    fn copy_data(&self) -> Option<String> {
        self.selected_record().map(|entry| {
            serde_json::json!({
                "timestamp": entry.timestamp.to_rfc3339(),
                "level": entry.level.as_str(),
                "target": entry.target,
                "message": entry.message,
            })
            .to_string()
        })
    }

    fn copy_description(&self) -> String {
        "log entry".to_string()
    }
}

impl Interactive for LogsPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.step_selection(-1);
                Handled::Yes
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.step_selection(1);
                Handled::Yes
            }
            KeyCode::Home => {
                self.scroll.scroll_to_top();
                if !self.entries.is_empty() {
                    self.select(0);
                }
                Handled::Yes
            }
            KeyCode::End => {
                self.scroll.scroll_to_bottom();
                self.selected = self.entries.len().checked_sub(1);
                Handled::Yes
            }
            KeyCode::PageUp => {
                self.scroll.page_up();
                Handled::Yes
            }
            KeyCode::PageDown => {
                self.scroll.page_down();
                Handled::Yes
            }
            KeyCode::Esc => {
                // Clear selection and return to auto-follow
                if self.selected.is_some() {
                    self.selected = None;
                    self.scroll.auto_follow = true;
                    Handled::Yes
                } else {
                    Handled::No
                }
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:select  y:copy  Y:copy JSON  Esc:clear")
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Helper Functions
// ═══════════════════════════════════════════════════════════════════════════

fn format_record(entry: &LogRecord) -> String {
    format!(
        "[{}] {:5} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    )
}

fn log_level_style(level: &LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default()
            .fg(theme.error)
            .add_modifier(Modifier::BOLD),
        LogLevel::Warn => Style::default().fg(theme.warn),
        LogLevel::Info => Style::default().fg(theme.foreground),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(theme.muted),
    }
}
