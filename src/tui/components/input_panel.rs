//! Input panel
//!
//! Draws the `TextInput` the way a browser would: value (masked for
//! password), highlighted selection, caret. A details line underneath shows
//! what listeners would see: UTF-16 length, width counts and selection
//! offsets.

use crate::capture::{analyze, InputState};
use crate::theme::Theme;
use crate::tui::traits::{Component, ComponentId, RenderContext};
use crate::widget::TextInput;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthChar;

const PLACEHOLDER: &str = "Type here";

pub struct InputPanel;

impl InputPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, f: &mut Frame, area: Rect, input: &TextInput, ctx: &RenderContext) {
        let theme = ctx.theme;
        let block = self.block(markup_title(input), ctx);
        let inner = block.inner(area);
        f.render_widget(block, area);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let width = inner.width as usize;
        let offset = scroll_offset(input.caret_column(), width);

        let field = if input.value().is_empty() {
            Line::from(Span::styled(
                PLACEHOLDER,
                Style::default()
                    .fg(theme.muted)
                    .add_modifier(Modifier::ITALIC),
            ))
        } else {
            field_line(input, offset, width, theme)
        };
        f.render_widget(
            Paragraph::new(field),
            Rect::new(inner.x, inner.y, inner.width, 1),
        );

        if inner.height >= 2 {
            let details = Paragraph::new(details_line(input))
                .style(Style::default().fg(theme.muted));
            let y = inner.y + inner.height - 1;
            f.render_widget(details, Rect::new(inner.x, y, inner.width, 1));
        }

        // No caret while the terminal window itself is unfocused
        if ctx.is_focused(self.id()) && input.is_focused() {
            let column = input.caret_column().saturating_sub(offset) as u16;
            f.set_cursor_position((inner.x + column.min(inner.width.saturating_sub(1)), inner.y));
        }
    }
}

impl Default for InputPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for InputPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Input
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Helper Functions
// ═══════════════════════════════════════════════════════════════════════════

/// `<input type="text" inputmode="numeric">`
fn markup_title(input: &TextInput) -> String {
    match input.input_mode_attribute() {
        Some(attr) => format!(" <input type=\"{}\" {}> ", input.input_type().as_str(), attr),
        None => format!(" <input type=\"{}\"> ", input.input_type().as_str()),
    }
}

/// First visible column so the caret stays inside `width`
fn scroll_offset(caret_column: usize, width: usize) -> usize {
    caret_column.saturating_sub(width.saturating_sub(1))
}

/// Visible slice of the displayed value, selection highlighted
fn field_line(input: &TextInput, offset: usize, width: usize, theme: &Theme) -> Line<'static> {
    let selection = input.selection_columns();
    let normal = Style::default().fg(theme.foreground);
    let selected = Style::default().fg(theme.selection_fg).bg(theme.selection);

    let mut spans: Vec<Span> = Vec::new();
    let mut column = 0;
    for c in input.display_value().chars() {
        let w = c.width().unwrap_or(0);
        let start = column;
        column += w;
        if start < offset {
            continue;
        }
        if column > offset + width {
            break;
        }
        let style = match selection {
            Some((from, to)) if start >= from && start < to => selected,
            _ => normal,
        };
        spans.push(Span::styled(c.to_string(), style));
    }
    Line::from(spans)
}

/// `length 3 (1byte 2, 2byte 1)  selection 1-2`
fn details_line(input: &TextInput) -> String {
    let info = analyze(input.value());
    let selection = match (input.selection_start(), input.selection_end()) {
        (Some(start), Some(end)) => format!("selection {}-{}", start, end),
        _ => "selection n/a".to_string(),
    };
    format!(
        "length {} (1byte {}, 2byte {})  {}",
        info.total, info.one_byte, info.two_byte, selection
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{InputMode, InputType};

    #[test]
    fn test_markup_title_includes_input_mode_only_when_set() {
        let mut input = TextInput::new(InputType::Tel, None);
        assert_eq!(markup_title(&input), " <input type=\"tel\"> ");

        input.set_input_mode(Some(InputMode::Numeric));
        assert_eq!(
            markup_title(&input),
            " <input type=\"tel\" inputmode=\"numeric\"> "
        );
    }

    #[test]
    fn test_scroll_offset_keeps_caret_visible() {
        assert_eq!(scroll_offset(3, 10), 0);
        assert_eq!(scroll_offset(9, 10), 0);
        assert_eq!(scroll_offset(10, 10), 1);
        assert_eq!(scroll_offset(25, 10), 16);
    }

    #[test]
    fn test_details_for_empty_text_input() {
        let input = TextInput::default();
        assert_eq!(details_line(&input), "length 0 (1byte 0, 2byte 0)  selection 0-0");
    }

    #[test]
    fn test_details_without_selection_api() {
        let input = TextInput::new(InputType::Email, None);
        assert!(details_line(&input).ends_with("selection n/a"));
    }
}
