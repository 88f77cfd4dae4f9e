//! Terminal input → browser event sequences
//!
//! Each handler mutates the input exactly where a browser would and fires
//! the surrounding events in browser order, so listeners reading state see
//! pre-change values for `beforeinput`/`keydown` and post-change values for
//! `input`/`selectionchange`.

use super::keymap::{key_fields, keypress_fields, COMPOSITION_KEY_CODE};
use super::{EventSink, TextInput};
use crate::clipboard::ClipboardAccess;
use crate::events::{EventKind, KeyFields, RawEvent};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

impl TextInput {
    fn fire(&self, sink: &mut dyn EventSink, kind: EventKind, raw: RawEvent) {
        sink.dispatch(kind, &raw, self);
    }

    /// Route a terminal event that targets the input
    pub fn handle_event(
        &mut self,
        event: &Event,
        clipboard: &mut dyn ClipboardAccess,
        sink: &mut dyn EventSink,
    ) {
        match event {
            Event::Key(key) => self.handle_key(key, clipboard, sink),
            Event::Paste(text) => self.paste(Some(text.clone()), sink),
            Event::FocusGained => self.focus(sink),
            Event::FocusLost => self.blur(sink),
            _ => {}
        }
    }

    /// focus, focusin
    pub fn focus(&mut self, sink: &mut dyn EventSink) {
        if self.focused {
            return;
        }
        self.focused = true;
        self.commit();
        self.fire(sink, EventKind::Focus, RawEvent::plain());
        self.fire(sink, EventKind::FocusIn, RawEvent::plain());
    }

    /// change (if edited since focus), blur, focusout
    pub fn blur(&mut self, sink: &mut dyn EventSink) {
        if !self.focused {
            return;
        }
        self.commit_change(sink);
        self.focused = false;
        self.fire(sink, EventKind::Blur, RawEvent::plain());
        self.fire(sink, EventKind::FocusOut, RawEvent::plain());
    }

    fn commit_change(&mut self, sink: &mut dyn EventSink) {
        if self.is_dirty() {
            self.commit();
            self.fire(sink, EventKind::Change, RawEvent::plain());
        }
    }

    /// Handle one key event while the input has focus
    pub fn handle_key(
        &mut self,
        key: &KeyEvent,
        clipboard: &mut dyn ClipboardAccess,
        sink: &mut dyn EventSink,
    ) {
        if key.kind == KeyEventKind::Release {
            self.fire(sink, EventKind::KeyUp, RawEvent::keyboard(key_fields(key)));
            return;
        }

        let chord = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

        if let KeyCode::Char(c) = key.code {
            if self.ime_composition && !c.is_ascii() && !chord {
                self.compose(key, c, sink);
                return;
            }
        }

        self.fire(sink, EventKind::KeyDown, RawEvent::keyboard(key_fields(key)));

        let extend = key.modifiers.contains(KeyModifiers::SHIFT);
        match key.code {
            KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
                match c.to_ascii_lowercase() {
                    'a' => self.select_all_with_events(sink),
                    'c' => self.copy(clipboard, sink),
                    'x' => self.cut(clipboard, sink),
                    'v' => {
                        let text = match clipboard.read_text() {
                            Ok(text) => Some(text),
                            Err(e) => {
                                tracing::debug!("Clipboard read failed: {:#}", e);
                                None
                            }
                        };
                        self.paste(text, sink);
                    }
                    _ => {}
                }
            }
            KeyCode::Char(c) if !chord => {
                if let Some(fields) = keypress_fields(key) {
                    self.fire(sink, EventKind::KeyPress, RawEvent::keyboard(fields));
                }
                self.insert_with_selectionchange(&c.to_string(), "insertText", sink);
            }
            KeyCode::Enter => {
                if let Some(fields) = keypress_fields(key) {
                    self.fire(sink, EventKind::KeyPress, RawEvent::keyboard(fields));
                }
                self.commit_change(sink);
            }
            KeyCode::Backspace => {
                self.delete("deleteContentBackward", TextInput::delete_backward, sink)
            }
            KeyCode::Delete => self.delete("deleteContentForward", TextInput::delete_forward, sink),
            KeyCode::Left => {
                let target = if self.has_selection() && !extend {
                    self.selection_range().0
                } else {
                    self.cursor.saturating_sub(1)
                };
                self.move_with_events(target, extend, sink);
            }
            KeyCode::Right => {
                let target = if self.has_selection() && !extend {
                    self.selection_range().1
                } else {
                    self.cursor + 1
                };
                self.move_with_events(target, extend, sink);
            }
            KeyCode::Home | KeyCode::Up => self.move_with_events(0, extend, sink),
            KeyCode::End | KeyCode::Down => {
                let end = self.char_count();
                self.move_with_events(end, extend, sink);
            }
            _ => {}
        }
    }

    /// IME commit: the terminal delivered an already-composed character
    fn compose(&mut self, key: &KeyEvent, c: char, sink: &mut dyn EventSink) {
        let text = c.to_string();

        let mut fields: KeyFields = key_fields(key);
        fields.key = "Process".to_string();
        fields.key_code = COMPOSITION_KEY_CODE;
        self.fire(sink, EventKind::KeyDown, RawEvent::keyboard(fields));

        self.fire(sink, EventKind::CompositionStart, RawEvent::composition(""));
        self.fire(sink, EventKind::CompositionUpdate, RawEvent::composition(&text));
        let inserted = self.insert(&text, "insertCompositionText", true, sink);
        self.fire(sink, EventKind::CompositionEnd, RawEvent::composition(&text));
        if inserted {
            self.fire(sink, EventKind::SelectionChange, RawEvent::plain());
        }
    }

    /// beforeinput, mutation, input; true when the value changed
    ///
    /// Types that reject the text stop after `beforeinput`. The caller
    /// fires `selectionchange`.
    fn insert(
        &mut self,
        text: &str,
        input_type: &str,
        composing: bool,
        sink: &mut dyn EventSink,
    ) -> bool {
        self.fire(
            sink,
            EventKind::BeforeInput,
            RawEvent::input(input_type, Some(text.to_string()), composing),
        );
        if !self.input_type.accepts(text) {
            tracing::debug!("{} rejected {:?}", self.input_type.as_str(), text);
            return false;
        }
        self.replace_selection(text);
        self.fire(
            sink,
            EventKind::Input,
            RawEvent::input(input_type, Some(text.to_string()), composing),
        );
        true
    }

    fn insert_with_selectionchange(
        &mut self,
        text: &str,
        input_type: &str,
        sink: &mut dyn EventSink,
    ) {
        if self.insert(text, input_type, false, sink) {
            self.fire(sink, EventKind::SelectionChange, RawEvent::plain());
        }
    }

    fn delete(
        &mut self,
        input_type: &str,
        apply: fn(&mut TextInput) -> bool,
        sink: &mut dyn EventSink,
    ) {
        let would_change = if self.has_selection() {
            true
        } else if input_type == "deleteContentBackward" {
            self.cursor > 0
        } else {
            self.cursor < self.char_count()
        };
        if !would_change {
            return;
        }

        self.fire(sink, EventKind::BeforeInput, RawEvent::input(input_type, None, false));
        apply(self);
        self.fire(sink, EventKind::Input, RawEvent::input(input_type, None, false));
        self.fire(sink, EventKind::SelectionChange, RawEvent::plain());
    }

    /// Caret movement with selectstart / select / selectionchange
    fn move_with_events(&mut self, target: usize, extend: bool, sink: &mut dyn EventSink) {
        let before = (self.cursor, self.anchor);
        let target = target.min(self.char_count());

        let starting_selection = extend && self.anchor.is_none() && target != self.cursor;
        if starting_selection {
            self.fire(sink, EventKind::SelectStart, RawEvent::plain());
        }

        self.move_to(target, extend);

        if (self.cursor, self.anchor) != before {
            if extend && self.has_selection() {
                self.fire(sink, EventKind::Select, RawEvent::plain());
            }
            self.fire(sink, EventKind::SelectionChange, RawEvent::plain());
        }
    }

    fn select_all_with_events(&mut self, sink: &mut dyn EventSink) {
        if self.char_count() == 0 {
            return;
        }
        let before = self.selection_range();
        self.fire(sink, EventKind::SelectStart, RawEvent::plain());
        self.select_all();
        self.fire(sink, EventKind::Select, RawEvent::plain());
        if self.selection_range() != before {
            self.fire(sink, EventKind::SelectionChange, RawEvent::plain());
        }
    }

    /// The data store of a copy or cut event is empty while it is dispatched;
    /// the selection only reaches the clipboard in the default action.
    fn copy(&mut self, clipboard: &mut dyn ClipboardAccess, sink: &mut dyn EventSink) {
        let selected = self.selected_text();
        self.fire(sink, EventKind::Copy, RawEvent::clipboard(Some(String::new())));
        self.write_clipboard(&selected, clipboard);
    }

    fn cut(&mut self, clipboard: &mut dyn ClipboardAccess, sink: &mut dyn EventSink) {
        let selected = self.selected_text();
        self.fire(sink, EventKind::Cut, RawEvent::clipboard(Some(String::new())));
        if selected.is_empty() || !self.input_type.allows_clipboard_write() {
            return;
        }
        self.write_clipboard(&selected, clipboard);

        self.fire(sink, EventKind::BeforeInput, RawEvent::input("deleteByCut", None, false));
        self.replace_selection("");
        self.fire(sink, EventKind::Input, RawEvent::input("deleteByCut", None, false));
        self.fire(sink, EventKind::SelectionChange, RawEvent::plain());
    }

    fn write_clipboard(&self, text: &str, clipboard: &mut dyn ClipboardAccess) {
        if text.is_empty() || !self.input_type.allows_clipboard_write() {
            return;
        }
        if let Err(e) = clipboard.write_text(text) {
            tracing::warn!("Clipboard write failed: {:#}", e);
        }
    }

    /// paste, then the insertion (line breaks stripped, single-line input)
    ///
    /// `text` is `None` when the clipboard could not be read.
    pub fn paste(&mut self, text: Option<String>, sink: &mut dyn EventSink) {
        self.fire(sink, EventKind::Paste, RawEvent::clipboard(text.clone()));

        let Some(text) = text else {
            return;
        };
        let text: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
        if text.is_empty() {
            return;
        }
        self.insert_with_selectionchange(&text, "insertFromPaste", sink);
    }
}
