//! Core component trait
//!
//! Every panel implements `Component`: it has an identity used for focus
//! routing and picks its border color from the render context.

use crate::theme::Theme;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders};

/// Focusable panels
///
/// Tab cycles Input → Events → Logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComponentId {
    /// The text input under observation (default focus)
    #[default]
    Input,
    /// Captured event log
    Events,
    /// System logs panel
    Logs,
}

impl ComponentId {
    /// Cycle to next focusable component (Tab behavior)
    pub fn next_focus(self) -> Self {
        match self {
            Self::Input => Self::Events,
            Self::Events => Self::Logs,
            Self::Logs => Self::Input,
        }
    }

    /// Cycle to previous focusable component (Shift+Tab behavior)
    pub fn prev_focus(self) -> Self {
        match self {
            Self::Input => Self::Logs,
            Self::Events => Self::Input,
            Self::Logs => Self::Events,
        }
    }
}

/// Immutable context passed to components during rendering
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Color theme for styling
    pub theme: &'a Theme,

    /// Which component currently has focus
    pub focus: ComponentId,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a Theme, focus: ComponentId) -> Self {
        Self { theme, focus }
    }

    /// Check if a component is currently focused
    pub fn is_focused(&self, id: ComponentId) -> bool {
        self.focus == id
    }
}

/// Base trait for all panels
pub trait Component {
    /// Unique identifier for this component
    fn id(&self) -> ComponentId;

    /// Bordered block titled `title`, colored by focus state
    fn block<'t>(&self, title: String, ctx: &RenderContext) -> Block<'t> {
        let focused = ctx.is_focused(self.id());
        Block::default()
            .borders(Borders::ALL)
            .border_type(ctx.theme.border_type)
            .border_style(Style::default().fg(ctx.theme.panel_border(self.id(), focused)))
            .title(title)
    }
}
