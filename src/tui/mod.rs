// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (terminal input, timer ticks, export results)
// - Rendering the UI

pub mod app;
pub mod components;
pub mod layout;
pub mod modal;
pub mod scroll;
pub mod traits;
pub mod views;

use crate::clipboard::SystemClipboard;
use crate::config::Config;
use crate::event_log::{ExportFormat, ExportOutcome};
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        DisableBracketedPaste, DisableFocusChange, EnableBracketedPaste, EnableFocusChange, Event,
        EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use futures::StreamExt;
use modal::ModalAction;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use traits::{ComponentId, Handled};

/// Run the TUI
///
/// This function sets up the terminal, runs the event loop, and cleans up
/// when done.
pub async fn run_tui(config: Config, log_buffer: LogBuffer) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableFocusChange
    )
    .context("Failed to setup terminal")?;

    // Key releases are only reported under the kitty keyboard protocol
    let enhanced = config.capture.keyboard_enhancement
        && supports_keyboard_enhancement().unwrap_or(false);
    if enhanced {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )
        .context("Failed to enable keyboard enhancement")?;
        tracing::info!("Keyboard enhancement enabled, keyup events will be captured");
    } else {
        tracing::info!("Terminal does not report key releases, keyup will not fire");
    }

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::with_config(&config, log_buffer);

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    if enhanced {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)
            .context("Failed to restore keyboard flags")?;
    }
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableBracketedPaste,
        LeaveAlternateScreen
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// This loop handles three sources:
/// 1. Terminal events (keys, paste, focus changes)
/// 2. Timer ticks (toast expiry and periodic redraws)
/// 3. Export results coming back from the clipboard worker
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));
    let mut events = EventStream::new();
    let (export_tx, mut export_rx) = mpsc::unbounded_channel::<ExportOutcome>();

    loop {
        // Draw the UI
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            maybe_event = events.next() => match maybe_event {
                Some(Ok(event)) => {
                    if let Some(format) = handle_terminal_event(app, event) {
                        start_export(app, format, &export_tx);
                    }
                }
                Some(Err(e)) => tracing::warn!("Terminal event error: {}", e),
                None => break,
            },

            // Periodic tick for redrawing
            _ = tick_interval.tick() => {
                app.clear_expired_toast();
            }

            // Export finished on the worker
            Some(outcome) = export_rx.recv() => {
                app.finish_export(outcome);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Hand a prepared export to a blocking task
///
/// The clipboard write can block on some platforms; the result comes back
/// through `tx` and is reported by `App::finish_export`.
fn start_export(app: &mut App, format: ExportFormat, tx: &mpsc::UnboundedSender<ExportOutcome>) {
    let Some(job) = app.begin_export(format) else {
        return;
    };
    let tx = tx.clone();
    tokio::task::spawn_blocking(move || {
        let outcome = job.deliver(&mut SystemClipboard);
        if tx.send(outcome).is_err() {
            tracing::debug!("Export finished after the UI closed");
        }
    });
}

/// Route one terminal event; returns an export request if one was made
fn handle_terminal_event(app: &mut App, event: Event) -> Option<ExportFormat> {
    match event {
        Event::Key(key_event) => handle_key_event(app, key_event),
        Event::Paste(_) => {
            if app.modal.is_none() && app.focused == ComponentId::Input {
                app.handle_input_event(&event);
            }
            None
        }
        Event::FocusGained => {
            app.handle_terminal_focus(true);
            None
        }
        Event::FocusLost => {
            app.handle_terminal_focus(false);
            None
        }
        _ => None,
    }
}

/// Handle keyboard input
/// Layered dispatch: Modal → Global → Focused panel
fn handle_key_event(app: &mut App, key_event: KeyEvent) -> Option<ExportFormat> {
    // Layer 1: Modal captures all input when active
    if handle_modal_input(app, &key_event) {
        return None;
    }

    // Layer 2: Global keys (work regardless of focus)
    if let Some(handled) = handle_global_keys(app, &key_event) {
        return handled;
    }

    // Layer 3: Focused panel
    match app.focused {
        // The input sees every kind, releases become keyup
        ComponentId::Input => {
            app.handle_input_event(&Event::Key(key_event));
            None
        }
        ComponentId::Events => {
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            match key_event.code {
                KeyCode::Char('c') => {
                    app.clear_log();
                    None
                }
                KeyCode::Char('y') => Some(ExportFormat::Text),
                KeyCode::Char('Y') => Some(ExportFormat::Jsonl),
                _ => {
                    app.dispatch_to_focused(key_event);
                    None
                }
            }
        }
        ComponentId::Logs => {
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            match key_event.code {
                KeyCode::Char('y') => app.copy_log_record(false),
                KeyCode::Char('Y') => app.copy_log_record(true),
                _ => {
                    if app.dispatch_to_focused(key_event) == Handled::No {
                        tracing::trace!("Unhandled key in logs panel: {:?}", key_event.code);
                    }
                }
            }
            None
        }
    }
}

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(ref mut modal) = app.modal else {
        return false;
    };

    if key_event.kind != KeyEventKind::Press {
        return true; // Modal absorbs other non-press events (Repeat, Release)
    }

    match modal.handle_input(key_event.code) {
        ModalAction::None => {}
        ModalAction::Close => app.modal = None,
    }

    true // Modal absorbed the input
}

/// Handle global keys
///
/// `None` means the key was not global; `Some(export)` means it was
/// consumed, with an optional export request.
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> Option<Option<ExportFormat>> {
    let key = key_event.code;
    let shift = key_event.modifiers.contains(KeyModifiers::SHIFT);
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

    let is_global = matches!(
        key,
        KeyCode::F(1 | 2 | 3 | 5 | 6 | 7) | KeyCode::Tab | KeyCode::BackTab
    ) || (ctrl && matches!(key, KeyCode::Char('q' | 'Q')));
    if !is_global {
        return None;
    }

    // Releases and repeats of global keys never reach the panels
    if key_event.kind != KeyEventKind::Press {
        return Some(None);
    }

    let export = match key {
        KeyCode::Char(_) => {
            app.should_quit = true;
            None
        }
        KeyCode::F(1) => {
            app.modal = Some(modal::Modal::help());
            None
        }
        KeyCode::F(2) => {
            app.cycle_type(!shift);
            None
        }
        KeyCode::F(3) => {
            app.cycle_input_mode(!shift);
            None
        }
        KeyCode::F(5) => {
            app.clear_log();
            None
        }
        KeyCode::F(6) => Some(ExportFormat::Text),
        KeyCode::F(7) => Some(ExportFormat::Jsonl),
        KeyCode::BackTab => {
            app.focus_prev();
            None
        }
        KeyCode::Tab if shift => {
            app.focus_prev();
            None
        }
        KeyCode::Tab => {
            app.focus_next();
            None
        }
        _ => None,
    };
    Some(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::tests::FakeClipboard;
    use crate::events::EventKind;
    use crate::tui::modal::Modal;

    fn app() -> App {
        App::with_clipboard(
            &Config::default(),
            LogBuffer::new(),
            Box::new(FakeClipboard::default()),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_ctrl_q_quits_from_input() {
        let mut app = app();
        handle_key_event(&mut app, KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_plain_q_types_into_input() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('q')));
        assert!(!app.should_quit);
        assert_eq!(crate::capture::InputState::value(&app.input), "q");
    }

    #[test]
    fn test_modal_absorbs_keys_until_closed() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::F(1)));
        assert_eq!(app.modal, Some(Modal::Help));

        let before = app.log.len();
        handle_key_event(&mut app, key(KeyCode::Char('x')));
        assert_eq!(app.log.len(), before);

        handle_key_event(&mut app, key(KeyCode::Esc));
        assert!(app.modal.is_none());
    }

    #[test]
    fn test_shift_f2_cycles_type_backwards() {
        let mut app = app();
        handle_key_event(&mut app, KeyEvent::new(KeyCode::F(2), KeyModifiers::SHIFT));
        assert_eq!(app.input.input_type(), crate::widget::InputType::Search);
    }

    #[test]
    fn test_events_panel_keys() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Tab));
        assert_eq!(app.focused, ComponentId::Events);

        assert_eq!(
            handle_key_event(&mut app, key(KeyCode::Char('Y'))),
            Some(ExportFormat::Jsonl)
        );
        assert_eq!(handle_key_event(&mut app, key(KeyCode::Char('c'))), None);
        assert!(app.log.is_empty());
    }

    #[test]
    fn test_export_keys_request_export() {
        let mut app = app();
        assert_eq!(
            handle_key_event(&mut app, key(KeyCode::F(6))),
            Some(ExportFormat::Text)
        );
        assert_eq!(
            handle_key_event(&mut app, key(KeyCode::F(7))),
            Some(ExportFormat::Jsonl)
        );
    }

    #[test]
    fn test_release_of_global_key_is_swallowed() {
        let mut app = app();
        let mut release = key(KeyCode::Tab);
        release.kind = KeyEventKind::Release;
        handle_key_event(&mut app, release);
        assert_eq!(app.focused, ComponentId::Input);
    }

    #[test]
    fn test_release_reaches_input_as_keyup() {
        let mut app = app();
        let mut release = key(KeyCode::Char('a'));
        release.kind = KeyEventKind::Release;
        handle_key_event(&mut app, release);
        assert_eq!(app.log.entries().last().map(|e| e.kind), Some(EventKind::KeyUp));
    }

    #[test]
    fn test_paste_ignored_when_input_not_focused() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Tab));
        let before = app.log.len();
        handle_terminal_event(&mut app, Event::Paste("hi".to_string()));
        assert_eq!(app.log.len(), before);
    }
}
