// Status bar component
//
// Renders the current controls and key hints at the bottom: type,
// inputmode, entry count, then hints for the focused panel.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Global keys, shown after the focused panel's own hints
const GLOBAL_HINTS: &str = "F1:help  F2:type  F3:mode  F5:clear  F6/F7:export  Tab:focus  ^Q:quit";

/// Render the status bar
///
/// Adapts to terminal width:
/// - Wide: labels and all hints
/// - Narrow: bare values and the focused panel's hint only
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bp = Breakpoint::from_width(area.width);
    let input_type = app.input.input_type().as_str();
    let mode = match app.input.input_mode() {
        Some(mode) => mode.as_str(),
        None => "(unset)",
    };
    let count = app.log.len();
    let hint = app.focus_hint().unwrap_or("");

    let status_text = if bp == Breakpoint::Narrow {
        format!(" {} │ {} │ {} │ {}", input_type, mode, count, hint)
    } else {
        format!(
            " type: {} │ inputmode: {} │ events: {} │ {}  {}",
            input_type, mode, count, hint, GLOBAL_HINTS
        )
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}

