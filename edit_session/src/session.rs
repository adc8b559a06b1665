//! Per-tick editing pipeline
//!
//! `EditSession` owns the text buffer and the hold-counter map and runs the
//! fixed Advance -> Sample -> Resolve -> Apply pipeline once per tick.
//! Hosts report raw press/release edges between ticks; edges take effect at
//! the start of the next tick, after the counters of already-held keys have
//! advanced, so a fresh press is resolved at counter 1 on its first tick.

use document_core::{Direction, Position, TextBuffer};
use input_types::{KeyCode, KeyHolds, Modifiers};
use serde::{Deserialize, Serialize};

use crate::keymap::{resolve, EditAction, TAB_WIDTH};
use crate::load::{load_document, LoadError};
use crate::repeat::{movement, winning_edit_key};

/// What a single tick did to the buffer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickReport {
    /// Cursor moves applied this tick, in application order
    pub moves: Vec<Direction>,
    /// The edit action applied this tick, if any
    pub edit: Option<EditAction>,
}

impl TickReport {
    /// Returns true if the tick mutated buffer state
    pub fn changed(&self) -> bool {
        !self.moves.is_empty() || self.edit.is_some()
    }
}

/// Tick-driven edit session over a single document
pub struct EditSession {
    buffer: TextBuffer,
    holds: KeyHolds,
    pending: Vec<(KeyCode, bool)>,
    load_error: Option<LoadError>,
}

impl EditSession {
    /// Creates a session over an empty document
    pub fn new() -> Self {
        Self {
            buffer: TextBuffer::new(),
            holds: KeyHolds::new(),
            pending: Vec::new(),
            load_error: None,
        }
    }

    /// Creates a session over the given initial content
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            buffer: TextBuffer::from_bytes(bytes),
            holds: KeyHolds::new(),
            pending: Vec::new(),
            load_error: None,
        }
    }

    /// Creates a session over the document at `path`.
    ///
    /// A missing or unreadable file yields an empty document; the cause is
    /// observable through [`EditSession::loaded`] and
    /// [`EditSession::load_error`].
    pub fn from_path(path: impl AsRef<std::path::Path>) -> Self {
        let doc = load_document(path);
        Self {
            buffer: TextBuffer::from_bytes(&doc.bytes),
            holds: KeyHolds::new(),
            pending: Vec::new(),
            load_error: doc.error,
        }
    }

    /// Records a key press edge; applied at the start of the next tick
    pub fn key_pressed(&mut self, key: KeyCode) {
        self.pending.push((key, true));
    }

    /// Records a key release edge; applied at the start of the next tick
    pub fn key_released(&mut self, key: KeyCode) {
        self.pending.push((key, false));
    }

    /// Runs one tick: advance counters, apply pending edges, resolve the
    /// movement and edit channels, and apply the results to the buffer.
    ///
    /// Movement applies before the edit action, in Left/Right/Up/Down
    /// order. Runs to completion; no state carries across ticks beyond the
    /// hold counters themselves.
    pub fn tick(&mut self, modifiers: Modifiers) -> TickReport {
        self.holds.advance();
        for (key, pressed) in self.pending.drain(..) {
            if pressed {
                self.holds.press(key);
            } else {
                self.holds.release(key);
            }
        }

        let moves = movement(&self.holds);
        for direction in &moves {
            self.buffer.move_cursor(*direction);
        }

        let mut edit = None;
        if let Some(key) = winning_edit_key(&self.holds) {
            if let Some(action) = resolve(key, modifiers) {
                self.apply(action);
                edit = Some(action);
            }
        }

        TickReport { moves, edit }
    }

    fn apply(&mut self, action: EditAction) {
        match action {
            EditAction::Char(byte) => self.buffer.insert(byte),
            EditAction::Tab => {
                for _ in 0..TAB_WIDTH {
                    self.buffer.insert(b' ');
                }
            }
            EditAction::Enter => self.buffer.insert(b'\n'),
            EditAction::Backspace => {
                self.buffer.remove();
            }
        }
    }

    // Read access for rendering hosts and tests

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn contents(&self) -> String {
        self.buffer.contents()
    }

    pub fn position(&self) -> Position {
        self.buffer.position()
    }

    pub fn holds(&self) -> &KeyHolds {
        &self.holds
    }

    /// Returns true unless the initial document failed to load
    pub fn loaded(&self) -> bool {
        self.load_error.is_none()
    }

    /// The failure behind an empty initial document, if any
    pub fn load_error(&self) -> Option<&LoadError> {
        self.load_error.as_ref()
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repeat::INITIAL_DELAY;
    use std::io::Write;

    /// Press a key, run one tick, release it.
    fn tap(session: &mut EditSession, key: KeyCode, modifiers: Modifiers) -> TickReport {
        session.key_pressed(key);
        let report = session.tick(modifiers);
        session.key_released(key);
        report
    }

    #[test]
    fn test_fresh_press_fires_on_first_tick() {
        let mut session = EditSession::new();
        let report = tap(&mut session, KeyCode::A, Modifiers::none());
        assert_eq!(report.edit, Some(EditAction::Char(b'a')));
        assert!(report.changed());
        assert_eq!(session.contents(), "a");
    }

    #[test]
    fn test_typing_sequence() {
        let mut session = EditSession::new();
        tap(&mut session, KeyCode::H, Modifiers::SHIFT);
        tap(&mut session, KeyCode::I, Modifiers::none());
        tap(&mut session, KeyCode::Num1, Modifiers::SHIFT);
        assert_eq!(session.contents(), "Hi!");
        assert_eq!(session.position(), Position::new(0, 3));
    }

    #[test]
    fn test_held_key_repeats_after_delay() {
        let mut session = EditSession::new();
        session.key_pressed(KeyCode::A);
        for _ in 0..34 {
            session.tick(Modifiers::none());
        }
        // Counters 1..=34 fire at 1, 30, 32 and 34.
        assert_eq!(session.contents(), "aaaa");
    }

    #[test]
    fn test_no_repeat_during_initial_delay() {
        let mut session = EditSession::new();
        session.key_pressed(KeyCode::A);
        for _ in 0..(INITIAL_DELAY - 1) {
            session.tick(Modifiers::none());
        }
        assert_eq!(session.contents(), "a");
    }

    #[test]
    fn test_enter_inserts_newline() {
        let mut session = EditSession::new();
        tap(&mut session, KeyCode::A, Modifiers::none());
        tap(&mut session, KeyCode::Enter, Modifiers::none());
        tap(&mut session, KeyCode::B, Modifiers::none());
        assert_eq!(session.contents(), "a\nb");
        assert_eq!(session.position(), Position::new(1, 1));
    }

    #[test]
    fn test_tab_expands_to_four_spaces() {
        let mut session = EditSession::new();
        let report = tap(&mut session, KeyCode::Tab, Modifiers::none());
        assert_eq!(report.edit, Some(EditAction::Tab));
        assert_eq!(session.contents(), "    ");
        assert_eq!(session.position(), Position::new(0, 4));
    }

    #[test]
    fn test_backspace_removes_byte() {
        let mut session = EditSession::from_bytes(b"ab");
        tap(&mut session, KeyCode::Right, Modifiers::none());
        tap(&mut session, KeyCode::Right, Modifiers::none());
        tap(&mut session, KeyCode::Backspace, Modifiers::none());
        assert_eq!(session.contents(), "a");
        assert_eq!(session.position(), Position::new(0, 1));
    }

    #[test]
    fn test_backspace_on_empty_document_is_noop() {
        let mut session = EditSession::new();
        let report = tap(&mut session, KeyCode::Backspace, Modifiers::none());
        assert_eq!(report.edit, Some(EditAction::Backspace));
        assert_eq!(session.contents(), "");
        assert_eq!(session.position(), Position::zero());
    }

    #[test]
    fn test_movement_and_edit_same_tick() {
        let mut session = EditSession::from_bytes(b"xyz");
        session.key_pressed(KeyCode::Right);
        session.key_pressed(KeyCode::A);
        let report = session.tick(Modifiers::none());
        // The move applies first, then the insertion lands after 'x'.
        assert_eq!(report.moves, vec![Direction::Right]);
        assert_eq!(report.edit, Some(EditAction::Char(b'a')));
        assert_eq!(session.contents(), "xayz");
    }

    #[test]
    fn test_two_directions_fire_in_one_tick() {
        let mut session = EditSession::from_bytes(b"ab\ncd");
        session.key_pressed(KeyCode::Right);
        session.key_pressed(KeyCode::Down);
        let report = session.tick(Modifiers::none());
        assert_eq!(report.moves, vec![Direction::Right, Direction::Down]);
        assert_eq!(session.position(), Position::new(1, 1));
    }

    #[test]
    fn test_arrow_keys_produce_no_edit() {
        let mut session = EditSession::from_bytes(b"ab");
        let report = tap(&mut session, KeyCode::Right, Modifiers::none());
        assert_eq!(report.edit, None);
        assert_eq!(session.contents(), "ab");
    }

    #[test]
    fn test_unknown_key_is_silently_ignored() {
        let mut session = EditSession::new();
        let report = tap(&mut session, KeyCode::Unknown, Modifiers::none());
        assert_eq!(report.edit, None);
        assert!(!report.changed());
        assert_eq!(session.contents(), "");
    }

    #[test]
    fn test_most_recent_press_wins_over_held_key() {
        let mut session = EditSession::new();
        session.key_pressed(KeyCode::A);
        for _ in 0..INITIAL_DELAY {
            session.tick(Modifiers::none());
        }
        session.key_pressed(KeyCode::B);
        let report = session.tick(Modifiers::none());
        assert_eq!(report.edit, Some(EditAction::Char(b'b')));
    }

    #[test]
    fn test_release_stops_repeat() {
        let mut session = EditSession::new();
        session.key_pressed(KeyCode::A);
        session.tick(Modifiers::none());
        session.key_released(KeyCode::A);
        for _ in 0..60 {
            session.tick(Modifiers::none());
        }
        assert_eq!(session.contents(), "a");
    }

    #[test]
    fn test_idle_tick_reports_no_change() {
        let mut session = EditSession::new();
        let report = session.tick(Modifiers::none());
        assert!(!report.changed());
        assert_eq!(report, TickReport::default());
    }

    #[test]
    fn test_same_trace_same_state() {
        let run = || {
            let mut session = EditSession::from_bytes(b"seed\ntext");
            tap(&mut session, KeyCode::Right, Modifiers::none());
            tap(&mut session, KeyCode::Down, Modifiers::none());
            tap(&mut session, KeyCode::X, Modifiers::SHIFT);
            tap(&mut session, KeyCode::Backspace, Modifiers::none());
            session.buffer().snapshot()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_from_path_loads_content() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"loaded\ncontent").unwrap();

        let session = EditSession::from_path(file.path());
        assert!(session.loaded());
        assert_eq!(session.contents(), "loaded\ncontent");
        assert_eq!(session.buffer().len(), 14);
        assert_eq!(session.buffer().cursor(), 0);
    }

    #[test]
    fn test_from_path_missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let session = EditSession::from_path(dir.path().join("absent.txt"));
        assert!(!session.loaded());
        assert!(session.load_error().is_some());
        assert_eq!(session.buffer().len(), 0);
        assert_eq!(session.buffer().cursor(), 0);
    }

    #[test]
    fn test_tick_report_serialization() {
        let report = TickReport {
            moves: vec![Direction::Left, Direction::Down],
            edit: Some(EditAction::Enter),
        };
        let json = serde_json::to_string(&report).unwrap();
        let deserialized: TickReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, deserialized);
    }
}
