// Views module - screen-level rendering logic
//
// There is a single screen: input on top, event log in the middle, system
// logs and status bar at the bottom. Modals and toasts render over it.

mod modal;

use super::app::App;
use super::layout::{inner_height, ScreenLayout};
use crate::tui::components::status_bar;
use crate::tui::traits::RenderContext;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let layout = ScreenLayout::compute(f.area());

    // Sync scroll dimensions before rendering
    app.events_panel
        .sync(app.log.len(), inner_height(layout.events));
    if let Some(area) = layout.logs {
        app.logs_panel
            .sync_entries(app.log_buffer.get_all(), inner_height(area));
    }

    let ctx = RenderContext::new(&app.theme, app.focused);
    app.input_panel.render(f, layout.input, &app.input, &ctx);
    app.events_panel
        .render(f, layout.events, app.log.entries(), &ctx);
    if let Some(area) = layout.logs {
        app.logs_panel.render(f, area, &ctx);
    }
    status_bar::render(f, layout.status, app);

    // Render modal overlay (on top of everything)
    if let Some(ref modal_state) = app.modal {
        modal::render(f, modal_state, app);
    }

    // Render toast notification (on top of modal too)
    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }
}
