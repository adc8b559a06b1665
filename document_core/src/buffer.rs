//! Text buffer and cursor bookkeeping
//!
//! `TextBuffer` owns the document bytes and keeps four pieces of cursor
//! state consistent across every operation: the linear offset, the 0-based
//! row and column, and the remembered column (`savepos`) that preserves
//! horizontal intent across vertical moves over lines of differing length.
//!
//! Row/col updates are incremental: each operation scans at most the
//! line(s) it touches. The newline total is carried in a counter so that
//! downward movement never rescans the document.

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "serde_support")]
use serde::{Deserialize, Serialize};

use crate::document::GapBuffer;
use crate::snapshot::BufferSnapshot;

/// Cursor position in the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub const fn zero() -> Self {
        Self { row: 0, col: 0 }
    }
}

/// Cursor movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde_support", derive(Serialize, Deserialize))]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Editable document with cursor state
#[derive(Debug, Clone)]
pub struct TextBuffer {
    data: GapBuffer,
    cursor: usize,
    row: usize,
    col: usize,
    savepos: usize,
    newlines: usize,
}

impl TextBuffer {
    /// Creates an empty buffer with the cursor at the start
    pub fn new() -> Self {
        Self {
            data: GapBuffer::new(),
            cursor: 0,
            row: 0,
            col: 0,
            savepos: 0,
            newlines: 0,
        }
    }

    /// Creates a buffer holding `bytes`, cursor at the start
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let newlines = bytes.iter().filter(|b| **b == b'\n').count();
        Self {
            data: GapBuffer::from_bytes(bytes),
            cursor: 0,
            row: 0,
            col: 0,
            savepos: 0,
            newlines,
        }
    }

    /// Document size in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the document holds no bytes
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Linear cursor offset, always in `0..=len()`
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Cursor position as (row, col)
    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }

    /// Remembered target column for vertical movement
    pub fn saved_column(&self) -> usize {
        self.savepos
    }

    /// Number of lines (newline count + 1)
    pub fn line_count(&self) -> usize {
        self.newlines + 1
    }

    /// Reads the byte at `index`
    pub fn byte_at(&self, index: usize) -> Option<u8> {
        self.data.get(index)
    }

    /// Copies the document out as a contiguous byte vector
    pub fn to_bytes(&self) -> Vec<u8> {
        self.data.to_vec()
    }

    /// Document contents as a string (invalid UTF-8 is replaced)
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.data.to_vec()).into_owned()
    }

    /// Document contents split into lines for display
    pub fn lines(&self) -> Vec<String> {
        let text = self.contents();
        let mut lines: Vec<String> = text.split('\n').map(String::from).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        lines
    }

    /// Captures the complete buffer state for parity testing
    pub fn snapshot(&self) -> BufferSnapshot {
        BufferSnapshot {
            cursor: self.cursor,
            row: self.row,
            col: self.col,
            savepos: self.savepos,
            text: self.contents(),
        }
    }

    /// Moves the cursor one step in `direction`.
    ///
    /// Horizontal moves update `savepos`; vertical moves leave it alone so
    /// that repeated up/down travel keeps aiming at the same column.
    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Left => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    if self.data.get(self.cursor) == Some(b'\n') {
                        if self.row > 0 {
                            self.row -= 1;
                        }
                        self.update_column();
                    } else {
                        self.col = self.col.saturating_sub(1);
                    }
                }
                self.savepos = self.col;
            }
            Direction::Right => {
                if self.cursor < self.data.len() {
                    if self.data.get(self.cursor) == Some(b'\n') {
                        self.row += 1;
                        self.col = 0;
                    } else {
                        self.col += 1;
                    }
                    self.cursor += 1;
                }
                self.savepos = self.col;
            }
            Direction::Up => {
                if self.row > 0 {
                    self.row -= 1;
                    let line_start = self.line_start(self.cursor);
                    if line_start > 0 {
                        // The byte before this line's start is the newline
                        // terminating the previous line.
                        let prev_end = line_start - 1;
                        let prev_start = self.line_start(prev_end);
                        let prev_len = prev_end - prev_start;
                        let target = self.savepos.min(prev_len);
                        self.cursor = prev_start + target;
                        self.col = target;
                    }
                }
            }
            Direction::Down => {
                if self.row < self.newlines {
                    self.row += 1;
                    let line_end = self.line_end(self.cursor);
                    if line_end < self.data.len() {
                        let next_start = line_end + 1;
                        let next_end = self.line_end(next_start);
                        let next_len = next_end - next_start;
                        let target = self.savepos.min(next_len);
                        self.cursor = next_start + target;
                        self.col = target;
                    } else {
                        self.cursor = self.data.len();
                        self.update_column();
                    }
                } else {
                    // Already on the last line: clamp to document end.
                    self.cursor = self.data.len();
                    self.update_column();
                }
            }
        }

        // Consistency guard; unreachable when the arms above are correct.
        if self.cursor > self.data.len() {
            self.cursor = self.data.len();
            self.recompute_row_col();
        }
    }

    /// Inserts one byte at the cursor and advances past it
    pub fn insert(&mut self, byte: u8) {
        if self.cursor > self.data.len() {
            self.cursor = self.data.len();
        }
        self.data.insert(self.cursor, byte);
        self.cursor += 1;
        if byte == b'\n' {
            self.col = 0;
            self.row += 1;
            self.savepos = 0;
            self.newlines += 1;
        } else {
            self.col += 1;
            self.savepos = self.col;
        }
    }

    /// Deletes the byte before the cursor (backspace semantics).
    ///
    /// Returns the removed byte, or None when the cursor sits at the start
    /// or the document is empty.
    pub fn remove(&mut self) -> Option<u8> {
        if self.cursor == 0 || self.data.is_empty() {
            return None;
        }
        let removed = self.data.remove(self.cursor - 1)?;
        self.cursor -= 1;
        if removed == b'\n' {
            self.row = self.row.saturating_sub(1);
            self.newlines = self.newlines.saturating_sub(1);
            self.update_column();
        } else {
            self.col = self.col.saturating_sub(1);
        }
        self.savepos = self.col;

        if self.cursor > self.data.len() {
            self.cursor = self.data.len();
            self.recompute_row_col();
            self.savepos = self.col;
        }
        Some(removed)
    }

    // Line geometry helpers. Each scans only within the line(s) adjacent to
    // `pos`; "no newline in that direction" is an explicit None.

    /// Index of the nearest newline strictly before `pos`
    fn prev_newline(&self, pos: usize) -> Option<usize> {
        (0..pos).rev().find(|&i| self.data.get(i) == Some(b'\n'))
    }

    /// Index of the nearest newline at or after `pos`
    fn next_newline(&self, pos: usize) -> Option<usize> {
        (pos..self.data.len()).find(|&i| self.data.get(i) == Some(b'\n'))
    }

    /// Offset of the first byte of the line containing `pos`
    fn line_start(&self, pos: usize) -> usize {
        self.prev_newline(pos).map_or(0, |i| i + 1)
    }

    /// Offset one past the last byte of the line containing `pos`
    fn line_end(&self, pos: usize) -> usize {
        self.next_newline(pos).unwrap_or(self.data.len())
    }

    /// Recomputes `col` from the cursor's line start
    fn update_column(&mut self) {
        self.col = self.cursor - self.line_start(self.cursor);
    }

    /// Full row/col recomputation from the document start.
    ///
    /// Only reached through the post-move consistency guard.
    fn recompute_row_col(&mut self) {
        self.row = (0..self.cursor)
            .filter(|&i| self.data.get(i) == Some(b'\n'))
            .count();
        self.update_column();
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}
