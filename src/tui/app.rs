// TUI application state
//
// This module owns everything the UI shows: the emulated input, the event
// log, panel state, focus, and overlays. Terminal setup and the event loop
// live in `tui::mod`; this file only reacts to already-routed input.

use super::components::{EventsPanel, InputPanel, LogsPanel, Toast};
use super::modal::Modal;
use super::traits::{ComponentId, Copyable, Handled, Interactive};
use crate::clipboard::{ClipboardAccess, SystemClipboard};
use crate::config::Config;
use crate::controls;
use crate::event_log::{EventLog, ExportFormat, ExportJob, ExportOutcome};
use crate::logging::LogBuffer;
use crate::theme::Theme;
use crate::widget::TextInput;
use crossterm::event::{Event, KeyEvent};

/// Hint shown in the status bar while the input has focus
const INPUT_HINT: &str = "type to fire events  ^A ^C ^X ^V";

/// Main application state for the TUI
pub struct App {
    /// The input under observation
    pub input: TextInput,

    /// Captured events, in firing order
    pub log: EventLog,

    /// Log buffer for system logs display
    pub log_buffer: LogBuffer,

    /// Current color theme
    pub theme: Theme,

    /// Which panel receives keys
    pub focused: ComponentId,

    // ─── Components ───
    pub input_panel: InputPanel,
    pub events_panel: EventsPanel,
    pub logs_panel: LogsPanel,

    // ─── Overlays ───
    /// Active toast notification (auto-dismisses)
    pub toast: Option<Toast>,

    /// Active modal (captures all input)
    pub modal: Option<Modal>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// An export is running on a blocking task
    pub export_pending: bool,

    /// Clipboard used by the input's copy/cut/paste and log record copies
    clipboard: Box<dyn ClipboardAccess>,
}

impl App {
    pub fn with_config(config: &Config, log_buffer: LogBuffer) -> Self {
        Self::with_clipboard(config, log_buffer, Box::new(SystemClipboard))
    }

    pub fn with_clipboard(
        config: &Config,
        log_buffer: LogBuffer,
        clipboard: Box<dyn ClipboardAccess>,
    ) -> Self {
        let mut input = TextInput::new(config.initial_type, config.initial_input_mode);
        input.ime_composition = config.capture.ime_composition;

        let mut app = Self {
            input,
            log: EventLog::new(),
            log_buffer,
            theme: Theme::by_name(&config.theme),
            focused: ComponentId::Input,
            input_panel: InputPanel::new(),
            events_panel: EventsPanel::new(),
            logs_panel: LogsPanel::new(),
            toast: None,
            modal: None,
            should_quit: false,
            export_pending: false,
            clipboard,
        };

        // The input starts focused, like an autofocus field
        app.input.focus(&mut app.log);
        app
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Input routing
    // ═══════════════════════════════════════════════════════════════════════

    /// Feed a terminal event to the input widget
    pub fn handle_input_event(&mut self, event: &Event) {
        self.input
            .handle_event(event, self.clipboard.as_mut(), &mut self.log);
    }

    /// Terminal window focus changes
    ///
    /// Only the input panel tracks DOM focus; when another panel has focus
    /// the input is already blurred.
    pub fn handle_terminal_focus(&mut self, gained: bool) {
        if self.focused != ComponentId::Input {
            return;
        }
        if gained {
            self.input.focus(&mut self.log);
        } else {
            self.input.blur(&mut self.log);
        }
    }

    /// Route a key to the focused panel's `Interactive` impl
    pub fn dispatch_to_focused(&mut self, key: KeyEvent) -> Handled {
        match self.focused {
            ComponentId::Input => Handled::No,
            ComponentId::Events => self.events_panel.handle_key(key),
            ComponentId::Logs => self.logs_panel.handle_key(key),
        }
    }

    /// Key hints for the focused panel
    pub fn focus_hint(&self) -> Option<&'static str> {
        match self.focused {
            ComponentId::Input => Some(INPUT_HINT),
            ComponentId::Events => self.events_panel.focus_hint(),
            ComponentId::Logs => self.logs_panel.focus_hint(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Focus
    // ═══════════════════════════════════════════════════════════════════════

    pub fn focus_next(&mut self) {
        self.set_focus(self.focused.next_focus());
    }

    pub fn focus_prev(&mut self) {
        self.set_focus(self.focused.prev_focus());
    }

    /// Move focus; leaving or entering the input fires its blur/focus events
    fn set_focus(&mut self, target: ComponentId) {
        if target == self.focused {
            return;
        }
        if self.focused == ComponentId::Input {
            self.input.blur(&mut self.log);
        }
        self.focused = target;
        if target == ComponentId::Input {
            self.input.focus(&mut self.log);
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Controls
    // ═══════════════════════════════════════════════════════════════════════

    pub fn cycle_type(&mut self, forward: bool) {
        controls::cycle_type(&mut self.input, &mut self.log, forward);
    }

    pub fn cycle_input_mode(&mut self, forward: bool) {
        controls::cycle_input_mode(&mut self.input, &mut self.log, forward);
    }

    /// Drop every captured event
    pub fn clear_log(&mut self) {
        self.log.clear();
        self.events_panel.reset();
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Export
    // ═══════════════════════════════════════════════════════════════════════

    /// Prepare an export for the clipboard worker
    ///
    /// Returns `None` for an empty log, after showing the blocking notice,
    /// and while another export is still running.
    pub fn begin_export(&mut self, format: ExportFormat) -> Option<ExportJob> {
        if self.export_pending {
            tracing::debug!("Export already in progress, ignoring request");
            return None;
        }
        match self.log.prepare_export(format) {
            Some(job) => {
                tracing::info!("Exporting {} {}", job.count, format.label());
                self.export_pending = true;
                Some(job)
            }
            None => {
                self.finish_export(ExportOutcome::Empty);
                None
            }
        }
    }

    /// Report an export result: success is a toast, anything else blocks
    pub fn finish_export(&mut self, outcome: ExportOutcome) {
        self.export_pending = false;
        if outcome.is_blocking() {
            let title = match outcome {
                ExportOutcome::Empty => "Export",
                _ => "Export failed",
            };
            self.modal = Some(Modal::notice(title, outcome.message()));
        } else {
            self.show_toast(outcome.message());
        }
    }

    /// Copy the selected system log record (`json` = structured form)
    pub fn copy_log_record(&mut self, json: bool) {
        let text = if json {
            self.logs_panel.copy_data()
        } else {
            self.logs_panel.copy_text()
        };
        let Some(text) = text else {
            self.show_toast("Select a log entry first");
            return;
        };
        match self.clipboard.write_text(&text) {
            Ok(()) => {
                let description = self.logs_panel.copy_description();
                self.show_toast(format!("✓ Copied {} to clipboard", description));
            }
            Err(e) => {
                tracing::warn!("Copy failed: {:#}", e);
                self.show_toast("✗ Failed to copy");
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Overlays
    // ═══════════════════════════════════════════════════════════════════════

    /// Show a toast notification
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Clear expired toast (call on tick)
    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired()) {
            self.toast = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::tests::FakeClipboard;
    use crate::events::EventKind;
    use crate::logging::{LogLevel, LogRecord};
    use crate::widget::InputType;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn app() -> App {
        App::with_clipboard(
            &Config::default(),
            LogBuffer::new(),
            Box::new(FakeClipboard::default()),
        )
    }

    fn kinds(app: &App) -> Vec<EventKind> {
        app.log.entries().iter().map(|e| e.kind).collect()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_input_event(&Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    #[test]
    fn test_starts_focused_on_input() {
        let app = app();
        assert_eq!(app.focused, ComponentId::Input);
        assert!(app.input.is_focused());
        assert_eq!(kinds(&app), vec![EventKind::Focus, EventKind::FocusIn]);
    }

    #[test]
    fn test_tab_away_blurs_with_change() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        app.log.clear();

        app.focus_next();

        assert_eq!(app.focused, ComponentId::Events);
        assert!(!app.input.is_focused());
        assert_eq!(
            kinds(&app),
            vec![EventKind::Change, EventKind::Blur, EventKind::FocusOut]
        );
    }

    #[test]
    fn test_cycling_back_to_input_refocuses() {
        let mut app = app();
        app.focus_next();
        app.focus_next();
        app.log.clear();

        app.focus_next();

        assert_eq!(app.focused, ComponentId::Input);
        assert_eq!(kinds(&app), vec![EventKind::Focus, EventKind::FocusIn]);
    }

    #[test]
    fn test_terminal_focus_ignored_off_input() {
        let mut app = app();
        app.focus_prev();
        assert_eq!(app.focused, ComponentId::Logs);
        app.log.clear();

        app.handle_terminal_focus(true);
        app.handle_terminal_focus(false);

        assert!(app.log.is_empty());
    }

    #[test]
    fn test_terminal_focus_lost_blurs_input() {
        let mut app = app();
        app.log.clear();
        app.handle_terminal_focus(false);
        assert_eq!(kinds(&app), vec![EventKind::Blur, EventKind::FocusOut]);
    }

    #[test]
    fn test_controls_append_synthetic_entries() {
        let mut app = app();
        app.cycle_type(true);
        app.cycle_input_mode(true);

        assert_eq!(app.input.input_type(), InputType::Password);
        let tail: Vec<EventKind> = kinds(&app).into_iter().rev().take(2).collect();
        assert_eq!(tail, vec![EventKind::InputModeChanged, EventKind::TypeChanged]);
    }

    #[test]
    fn test_clear_log_twice() {
        let mut app = app();
        app.clear_log();
        app.clear_log();
        assert!(app.log.is_empty());
    }

    #[test]
    fn test_empty_export_shows_notice_without_job() {
        let mut app = app();
        app.clear_log();

        assert!(app.begin_export(ExportFormat::Text).is_none());
        assert!(!app.export_pending);
        assert!(matches!(app.modal, Some(Modal::Notice { .. })));
    }

    #[test]
    fn test_export_round_trip_through_job() {
        let mut app = app();
        let job = app.begin_export(ExportFormat::Text).unwrap();
        assert!(app.export_pending);
        assert_eq!(job.count, 2);

        // Second request while pending is ignored
        assert!(app.begin_export(ExportFormat::Jsonl).is_none());

        let mut clipboard = FakeClipboard::default();
        let outcome = job.deliver(&mut clipboard);
        app.finish_export(outcome);

        assert!(!app.export_pending);
        assert!(app.modal.is_none());
        assert!(app.toast.is_some());
        assert_eq!(clipboard.writes.len(), 1);
        assert_eq!(clipboard.writes[0].lines().count(), 2);
    }

    #[test]
    fn test_failed_export_blocks_and_keeps_log() {
        let mut app = app();
        let job = app.begin_export(ExportFormat::Jsonl).unwrap();

        let outcome = job.deliver(&mut FakeClipboard::failing());
        app.finish_export(outcome);

        assert_eq!(app.log.len(), 2);
        match &app.modal {
            Some(Modal::Notice { title, .. }) => assert_eq!(title, "Export failed"),
            other => panic!("expected notice, got {:?}", other),
        }
    }

    #[test]
    fn test_copy_log_record_requires_selection() {
        let mut app = app();
        app.logs_panel.sync_entries(
            vec![LogRecord {
                timestamp: chrono::Utc::now(),
                level: LogLevel::Warn,
                target: "inputspy".to_string(),
                message: "hello".to_string(),
            }],
            5,
        );

        app.copy_log_record(false);
        assert_eq!(
            app.toast.as_ref().map(|t| t.message.as_str()),
            Some("Select a log entry first")
        );

        app.focused = ComponentId::Logs;
        app.dispatch_to_focused(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
        app.copy_log_record(true);
        assert_eq!(
            app.toast.as_ref().map(|t| t.message.as_str()),
            Some("✓ Copied log entry to clipboard")
        );
    }

    #[test]
    fn test_input_panel_ignores_dispatch() {
        let mut app = app();
        let handled = app.dispatch_to_focused(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        assert_eq!(handled, Handled::No);
    }
}
