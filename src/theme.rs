// Theme support for the TUI
//
// Small built-in palettes selected by name from config. Named themes use
// true color (RGB); "Terminal" uses the terminal's ANSI palette.

use crate::events::EventClass;
use crate::tui::traits::ComponentId;
use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Color palette for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub border_type: BorderType,
    pub title: Color,
    pub status_bar: Color,
    pub highlight: Color,
    pub selection: Color,
    pub selection_fg: Color,
    pub error: Color,
    pub warn: Color,

    // Event class colors
    pub keyboard: Color,
    pub input: Color,
    pub composition: Color,
    pub focus: Color,
    pub clipboard: Color,
    pub selection_event: Color,
    pub synthetic: Color,

    // Panel identity colors (used when focused)
    pub panel_input: Color,
    pub panel_events: Color,
    pub panel_logs: Color,
}

impl Theme {
    /// Names accepted by `by_name`
    pub fn names() -> &'static [&'static str] {
        &["Spy Dark", "Spy Light", "Terminal"]
    }

    /// Load theme by name (case-insensitive; unknown names fall back to Spy Dark)
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().replace(['-', '_'], " ").as_str() {
            "spy light" => Self::spy_light(),
            "terminal" | "auto" => Self::terminal(),
            "spy dark" => Self::spy_dark(),
            other => {
                tracing::warn!("Unknown theme '{}', using Spy Dark", other);
                Self::spy_dark()
            }
        }
    }

    /// Spy Dark - warm neutrals on charcoal
    pub fn spy_dark() -> Self {
        Self {
            name: "Spy Dark".to_string(),
            background: Color::Rgb(0x28, 0x29, 0x2d),
            foreground: Color::Rgb(0xd4, 0xcf, 0xc9),
            muted: Color::Rgb(0x8a, 0x82, 0x79),
            border: Color::Rgb(0x3a, 0x3b, 0x40),
            border_type: BorderType::Rounded,
            title: Color::Rgb(0xc9, 0xa6, 0x6b),
            status_bar: Color::Rgb(0xc9, 0xa6, 0x6b),
            highlight: Color::Rgb(0xc9, 0xa6, 0x6b),
            selection: Color::Rgb(0x3d, 0x38, 0x34),
            selection_fg: Color::Rgb(0xe8, 0xe4, 0xdf),
            error: Color::Rgb(0xc7, 0x5f, 0x4a),
            warn: Color::Rgb(0xd4, 0xa5, 0x4a),
            keyboard: Color::Rgb(0x6b, 0x98, 0xb8),
            input: Color::Rgb(0x8f, 0xad, 0x5c),
            composition: Color::Rgb(0xa8, 0x8f, 0xad),
            focus: Color::Rgb(0x5d, 0xa9, 0xa1),
            clipboard: Color::Rgb(0xe8, 0xb8, 0x7a),
            selection_event: Color::Rgb(0x9c, 0xa8, 0xb4),
            synthetic: Color::Rgb(0xd4, 0xa5, 0x4a),
            panel_input: Color::Rgb(0xc9, 0xa6, 0x6b),
            panel_events: Color::Rgb(0x6b, 0x98, 0xb8),
            panel_logs: Color::Rgb(0x8f, 0xad, 0x5c),
        }
    }

    /// Spy Light - soft paper background
    pub fn spy_light() -> Self {
        Self {
            name: "Spy Light".to_string(),
            background: Color::Rgb(0xfa, 0xf6, 0xf0),
            foreground: Color::Rgb(0x5c, 0x56, 0x50),
            muted: Color::Rgb(0x85, 0x7c, 0x72),
            border: Color::Rgb(0xcd, 0xc4, 0xb8),
            border_type: BorderType::Rounded,
            title: Color::Rgb(0xc4, 0x78, 0x4a),
            status_bar: Color::Rgb(0xc4, 0x78, 0x4a),
            highlight: Color::Rgb(0xc4, 0x78, 0x4a),
            selection: Color::Rgb(0xed, 0xe6, 0xdb),
            selection_fg: Color::Rgb(0x3d, 0x38, 0x34),
            error: Color::Rgb(0xb8, 0x5a, 0x4a),
            warn: Color::Rgb(0xc4, 0x94, 0x4a),
            keyboard: Color::Rgb(0x4a, 0x7a, 0x99),
            input: Color::Rgb(0x6a, 0x8f, 0x4a),
            composition: Color::Rgb(0x8a, 0x6a, 0x8f),
            focus: Color::Rgb(0x3d, 0x8a, 0x84),
            clipboard: Color::Rgb(0xc4, 0x78, 0x4a),
            selection_event: Color::Rgb(0x6a, 0x78, 0x80),
            synthetic: Color::Rgb(0xc4, 0x94, 0x4a),
            panel_input: Color::Rgb(0xc4, 0x78, 0x4a),
            panel_events: Color::Rgb(0x4a, 0x7a, 0x99),
            panel_logs: Color::Rgb(0x6a, 0x8f, 0x4a),
        }
    }

    /// Terminal - uses the terminal's ANSI palette
    pub fn terminal() -> Self {
        Self {
            name: "Terminal".to_string(),
            background: Color::Reset,
            foreground: Color::Reset,
            muted: Color::DarkGray,
            border: Color::Gray,
            border_type: BorderType::Plain,
            title: Color::Cyan,
            status_bar: Color::Green,
            highlight: Color::Yellow,
            selection: Color::DarkGray,
            selection_fg: Color::White,
            error: Color::Red,
            warn: Color::Yellow,
            keyboard: Color::Blue,
            input: Color::Green,
            composition: Color::Magenta,
            focus: Color::Cyan,
            clipboard: Color::LightYellow,
            selection_event: Color::Gray,
            synthetic: Color::Yellow,
            panel_input: Color::Yellow,
            panel_events: Color::Cyan,
            panel_logs: Color::DarkGray,
        }
    }

    /// Color for an event class
    pub fn event_class(&self, class: EventClass) -> Color {
        match class {
            EventClass::Keyboard => self.keyboard,
            EventClass::Input => self.input,
            EventClass::Composition => self.composition,
            EventClass::Focus => self.focus,
            EventClass::Clipboard => self.clipboard,
            EventClass::Selection => self.selection_event,
            EventClass::Synthetic => self.synthetic,
        }
    }

    /// Border color for a panel: identity color when focused, border otherwise
    pub fn panel_border(&self, panel: ComponentId, focused: bool) -> Color {
        if !focused {
            return self.border;
        }
        match panel {
            ComponentId::Input => self.panel_input,
            ComponentId::Events => self.panel_events,
            ComponentId::Logs => self.panel_logs,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::spy_dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name_is_case_insensitive() {
        assert_eq!(Theme::by_name("spy light").name, "Spy Light");
        assert_eq!(Theme::by_name("SPY-DARK").name, "Spy Dark");
        assert_eq!(Theme::by_name("terminal").name, "Terminal");
    }

    #[test]
    fn test_unknown_name_falls_back() {
        assert_eq!(Theme::by_name("Dracula").name, "Spy Dark");
    }

    #[test]
    fn test_every_listed_name_resolves() {
        for name in Theme::names() {
            assert_eq!(Theme::by_name(name).name, *name);
        }
    }
}
