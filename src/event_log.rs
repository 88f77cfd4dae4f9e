// Event log - the ordered, append-only list behind the event panel
//
// The log is an owned container: `append`, `clear` and the export path are
// the only ways to touch it. Entries keep firing order and are never
// reordered, deduplicated or evicted.

use crate::capture::{listener_for, EventSnapshot, InputState};
use crate::clipboard::ClipboardAccess;
use crate::events::{EventKind, RawEvent};
use crate::widget::EventSink;
use chrono::{DateTime, Local, Utc};
use serde_json::Value;

/// One rendered line of the log
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub kind: EventKind,
    /// Capture instant (snapshot timestamp, or append time for synthetic entries)
    pub time: DateTime<Utc>,
    pub snapshot: EventSnapshot,
}

impl LogEntry {
    pub fn new(kind: EventKind, snapshot: EventSnapshot) -> Self {
        Self {
            kind,
            time: snapshot.timestamp.unwrap_or_else(Utc::now),
            snapshot,
        }
    }

    /// Local wall-clock time with milliseconds
    pub fn display_time(&self) -> String {
        self.time
            .with_timezone(&Local)
            .format("%H:%M:%S%.3f")
            .to_string()
    }

    /// Flattened `name: literal` list of the non-empty fields
    pub fn summary(&self) -> String {
        self.snapshot
            .display_fields()
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Export line: `[time] kind: field: value, ...`
    pub fn line(&self) -> String {
        format!("[{}] {}: {}", self.display_time(), self.kind, self.summary())
            .trim_end()
            .to_string()
    }

    /// One JSON object: `time`, `kind`, then every captured field
    pub fn to_jsonl(&self) -> String {
        let mut object = serde_json::Map::new();
        object.insert("time".to_string(), Value::String(self.time.to_rfc3339()));
        object.insert("kind".to_string(), Value::String(self.kind.to_string()));
        object.extend(self.snapshot.to_json());
        Value::Object(object).to_string()
    }
}

/// Export flavor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Human-readable lines, same as the panel shows
    Text,
    /// One JSON object per line
    Jsonl,
}

impl ExportFormat {
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Text => "events",
            ExportFormat::Jsonl => "events as JSONL",
        }
    }
}

/// Result of an export request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Clipboard write succeeded
    Exported { count: usize, format: ExportFormat },
    /// Log was empty; the clipboard was not touched
    Empty,
    /// Clipboard write failed; the log is unchanged
    Failed(String),
}

impl ExportOutcome {
    /// Message shown to the user
    pub fn message(&self) -> String {
        match self {
            ExportOutcome::Exported { count, format } => {
                format!("✓ Copied {} {} to clipboard", count, format.label())
            }
            ExportOutcome::Empty => "Nothing to export".to_string(),
            ExportOutcome::Failed(err) => format!("✗ Failed to copy: {}", err),
        }
    }

    /// Failures and empty requests need acknowledging; success is a toast
    pub fn is_blocking(&self) -> bool {
        !matches!(self, ExportOutcome::Exported { .. })
    }
}

/// Export text ready to hand to the clipboard
///
/// Owns its text so it can move onto a blocking task.
#[derive(Debug, Clone)]
pub struct ExportJob {
    pub format: ExportFormat,
    pub text: String,
    pub count: usize,
}

impl ExportJob {
    /// Write the text to the clipboard and report how it went
    pub fn deliver(self, clipboard: &mut dyn ClipboardAccess) -> ExportOutcome {
        match clipboard.write_text(&self.text) {
            Ok(()) => ExportOutcome::Exported {
                count: self.count,
                format: self.format,
            },
            Err(e) => {
                tracing::warn!("Export to clipboard failed: {:#}", e);
                ExportOutcome::Failed(e.to_string())
            }
        }
    }
}

/// Append-only list of log entries
#[derive(Debug, Default)]
pub struct EventLog {
    entries: Vec<LogEntry>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture a widget firing through its listener and append the result
    ///
    /// Returns false (and logs nothing) for kinds with no listener.
    pub fn record(&mut self, kind: EventKind, raw: &RawEvent, state: &dyn InputState) -> bool {
        let Some(listener) = listener_for(kind) else {
            tracing::debug!("No listener registered for {}", kind);
            return false;
        };
        let snapshot = listener(kind, Some(raw), state);
        self.append(kind, snapshot);
        true
    }

    /// Add an entry at the end
    pub fn append(&mut self, kind: EventKind, snapshot: EventSnapshot) {
        tracing::trace!("{} captured", kind);
        self.entries.push(LogEntry::new(kind, snapshot));
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        if !self.is_empty() {
            tracing::debug!("Cleared {} events", self.entries.len());
        }
        self.entries.clear();
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export text for every entry, in display order
    ///
    /// `None` when there is nothing to export.
    pub fn prepare_export(&self, format: ExportFormat) -> Option<ExportJob> {
        if self.is_empty() {
            return None;
        }

        let lines: Vec<String> = self
            .entries
            .iter()
            .map(|entry| match format {
                ExportFormat::Text => entry.line(),
                ExportFormat::Jsonl => entry.to_jsonl(),
            })
            .collect();

        Some(ExportJob {
            format,
            count: lines.len(),
            text: lines.join("\n"),
        })
    }
}

impl EventSink for EventLog {
    fn dispatch(&mut self, kind: EventKind, raw: &RawEvent, state: &dyn InputState) {
        self.record(kind, raw, state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::tests::FakeState;
    use crate::clipboard::tests::FakeClipboard;
    use crate::events::MONITORED;

    fn sample_log() -> EventLog {
        let mut log = EventLog::new();
        let state = FakeState::new("A");
        log.record(
            EventKind::KeyDown,
            &RawEvent::keyboard(crate::events::KeyFields {
                key: "A".into(),
                code: "KeyA".into(),
                key_code: 65,
                shift: true,
                ..Default::default()
            }),
            &state,
        );
        log.record(
            EventKind::Input,
            &RawEvent::input("insertText", Some("A".into()), false),
            &state,
        );
        log.append(EventKind::TypeChanged, EventSnapshot::type_changed("email"));
        log
    }

    #[test]
    fn test_each_firing_appends_exactly_one_entry() {
        let mut log = EventLog::new();
        let state = FakeState::new("x");
        for (i, kind) in MONITORED.iter().enumerate() {
            assert!(log.record(*kind, &RawEvent::plain(), &state));
            assert_eq!(log.len(), i + 1);
            assert_eq!(log.entries().last().map(|e| e.kind), Some(*kind));
        }
    }

    #[test]
    fn test_synthetic_kind_is_not_recorded_through_listener() {
        let mut log = EventLog::new();
        let state = FakeState::new("");
        assert!(!log.record(EventKind::TypeChanged, &RawEvent::plain(), &state));
        assert!(log.is_empty());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut log = sample_log();
        log.clear();
        assert!(log.is_empty());
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_line_format() {
        let log = sample_log();
        let input = log.entries()[1].line();
        assert!(input.starts_with('['));
        assert!(
            input.contains(
                "] input: value: \"A\", selectionStart: 1, selectionEnd: 1, \
                 inputType: \"insertText\", data: \"A\", isComposing: false, \
                 dataByteType: \"1byte\", valueByteInfo: {\"total\":1,\"oneByte\":1,\"twoByte\":0}"
            ),
            "unexpected line: {}",
            input
        );
        assert!(!input.contains("timestamp"));

        let synthetic = log.entries()[2].line();
        assert!(synthetic.ends_with("] type-changed: newType: \"email\""));
    }

    #[test]
    fn test_empty_input_mode_entry_renders_no_fields() {
        let mut log = EventLog::new();
        log.append(
            EventKind::InputModeChanged,
            EventSnapshot::input_mode_changed(""),
        );
        let entry = &log.entries()[0];
        assert_eq!(entry.snapshot.new_input_mode.as_deref(), Some(""));
        assert!(entry.line().ends_with("] inputmode-changed:"));
    }

    #[test]
    fn test_export_keeps_count_and_order() {
        let log = sample_log();
        let job = log.prepare_export(ExportFormat::Text).unwrap();
        let lines: Vec<_> = job.text.split('\n').collect();
        assert_eq!(lines.len(), log.len());
        assert_eq!(job.count, 3);
        for (line, entry) in lines.iter().zip(log.entries()) {
            assert_eq!(*line, entry.line());
        }
    }

    #[test]
    fn test_export_jsonl_is_one_object_per_line() {
        let log = sample_log();
        let job = log.prepare_export(ExportFormat::Jsonl).unwrap();
        let kinds: Vec<String> = job
            .text
            .lines()
            .map(|line| {
                let value: Value = serde_json::from_str(line).unwrap();
                value["kind"].as_str().unwrap().to_string()
            })
            .collect();
        assert_eq!(kinds, vec!["keydown", "input", "type-changed"]);
    }

    #[test]
    fn test_export_empty_log_has_no_job() {
        let log = EventLog::new();
        assert!(log.prepare_export(ExportFormat::Text).is_none());
        assert!(log.prepare_export(ExportFormat::Jsonl).is_none());

        let outcome = ExportOutcome::Empty;
        assert!(outcome.is_blocking());
        assert_eq!(outcome.message(), "Nothing to export");
    }

    #[test]
    fn test_export_success_reports_count() {
        let log = sample_log();
        let mut clipboard = FakeClipboard::default();
        let job = log.prepare_export(ExportFormat::Text).unwrap();
        let outcome = job.deliver(&mut clipboard);
        assert_eq!(
            outcome,
            ExportOutcome::Exported {
                count: 3,
                format: ExportFormat::Text
            }
        );
        assert!(!outcome.is_blocking());
        assert_eq!(clipboard.writes.len(), 1);
        assert_eq!(clipboard.writes[0].lines().count(), 3);
    }

    #[test]
    fn test_export_failure_leaves_log_unchanged() {
        let log = sample_log();
        let before = log.entries().to_vec();
        let mut clipboard = FakeClipboard::failing();
        let job = log.prepare_export(ExportFormat::Text).unwrap();
        let outcome = job.deliver(&mut clipboard);
        assert!(matches!(outcome, ExportOutcome::Failed(_)));
        assert!(outcome.is_blocking());
        assert_eq!(log.entries(), before.as_slice());
    }
}
