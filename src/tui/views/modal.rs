// Modal overlay rendering
//
// Modals are rendered on top of the main content:
// - Notice: blocking message that must be acknowledged
// - Help: keyboard shortcuts and current settings

use crate::tui::app::App;
use crate::tui::modal::Modal;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::Notice { title, message } => render_notice(f, app, title, message),
        Modal::Help => render_help(f, app),
    }
}

/// Calculate centered rect for modal dialog
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

fn render_notice(f: &mut Frame, app: &App, title: &str, message: &str) {
    let width = (message.width() as u16 + 6).clamp(30, 70);
    let area = centered_rect(width, 5, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(Line::from(Span::styled(
        message,
        Style::default().fg(app.theme.foreground),
    )))
    .wrap(Wrap { trim: true })
    .style(Style::default().bg(app.theme.background))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.warn))
            .border_type(app.theme.border_type)
            .title(format!(" {} ", title))
            .title_bottom(Line::from(" Enter or Esc to dismiss ").centered()),
    );

    f.render_widget(paragraph, area);
}

/// Render the help modal overlay
fn render_help(f: &mut Frame, app: &App) {
    // Styles
    let key_style = Style::default().fg(app.theme.highlight);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.title)
        .add_modifier(Modifier::BOLD);
    let divider_style = Style::default().fg(app.theme.border);

    // Helper to create a keybind line: "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Controls", header_style)),
        kb("F2/Shift+F2", "Next / previous input type"),
        kb("F3/Shift+F3", "Next / previous inputmode"),
        kb("F5", "Clear event log"),
        kb("F6", "Export log as text"),
        kb("F7", "Export log as JSONL"),
        Line::raw(""),
        Line::from(Span::styled("  Input", header_style)),
        kb("Ctrl+A", "Select all"),
        kb("Ctrl+C/X/V", "Copy / cut / paste"),
        kb("Shift+←→", "Extend selection"),
        kb("Enter", "Commit (fires change)"),
        Line::raw(""),
        Line::from(Span::styled("  Event Log", header_style)),
        kb("↑/↓, j/k", "Scroll"),
        kb("c", "Clear"),
        kb("y / Y", "Export text / JSONL"),
        Line::raw(""),
        Line::from(Span::styled("  System Logs", header_style)),
        kb("↑/↓", "Select entry"),
        kb("y / Y", "Copy entry / as JSON"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("Tab", "Cycle panel focus"),
        kb("F1", "Toggle this help"),
        kb("Ctrl+Q", "Quit"),
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────",
            divider_style,
        )),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(&app.theme.name, key_style),
        ]),
    ]);

    let width = 46;
    let height = 34;
    let area = centered_rect(width, height, f.area());

    // Clear the area behind the modal
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .border_type(app.theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" Press F1 or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}
