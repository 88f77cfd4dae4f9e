//! Screen layout decisions
//!
//! Single source of truth for size thresholds - no magic numbers scattered in render code.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Input panel: border, field, details line
const INPUT_HEIGHT: u16 = 4;
/// System logs panel height when shown
const LOGS_HEIGHT: u16 = 8;
/// Status bar: top border plus one text row
const STATUS_HEIGHT: u16 = 2;
/// Below this terminal height the system logs panel is hidden
const MIN_HEIGHT_FOR_LOGS: u16 = 24;

/// Width class for the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 100 cols: bare values, focused panel hints only
    Narrow,
    /// 100+ cols: labels and global hints
    Wide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        if width < 100 {
            Breakpoint::Narrow
        } else {
            Breakpoint::Wide
        }
    }
}

/// Panel areas for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub input: Rect,
    pub events: Rect,
    /// `None` on short terminals
    pub logs: Option<Rect>,
    pub status: Rect,
}

impl ScreenLayout {
    pub fn compute(area: Rect) -> Self {
        let show_logs = area.height >= MIN_HEIGHT_FOR_LOGS;
        let logs_height = if show_logs { LOGS_HEIGHT } else { 0 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Min(3),
                Constraint::Length(logs_height),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(area);

        Self {
            input: chunks[0],
            events: chunks[1],
            logs: show_logs.then_some(chunks[2]),
            status: chunks[3],
        }
    }
}

/// Rows available inside a bordered panel
pub fn inner_height(area: Rect) -> usize {
    area.height.saturating_sub(2) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_thresholds() {
        assert_eq!(Breakpoint::from_width(60), Breakpoint::Narrow);
        assert_eq!(Breakpoint::from_width(99), Breakpoint::Narrow);
        assert_eq!(Breakpoint::from_width(100), Breakpoint::Wide);
    }

    #[test]
    fn logs_hidden_on_short_terminals() {
        let short = ScreenLayout::compute(Rect::new(0, 0, 80, 20));
        assert_eq!(short.logs, None);
        assert_eq!(short.input.height, INPUT_HEIGHT);
        assert_eq!(short.events.height, 20 - INPUT_HEIGHT - STATUS_HEIGHT);

        let tall = ScreenLayout::compute(Rect::new(0, 0, 80, 40));
        assert_eq!(tall.logs.map(|r| r.height), Some(LOGS_HEIGHT));
        assert_eq!(tall.status.y, 40 - STATUS_HEIGHT);
    }

    #[test]
    fn inner_height_excludes_borders() {
        assert_eq!(inner_height(Rect::new(0, 0, 10, 8)), 6);
        assert_eq!(inner_height(Rect::new(0, 0, 10, 1)), 0);
    }
}
