//! Gap-buffered byte sequence
//!
//! The document is stored as one contiguous allocation with a movable gap
//! at the edit point. Indexed reads are O(1); insert/remove at the gap is
//! amortized O(1) and costs O(distance) only when the gap has to move,
//! which keeps edit cost bounded by cursor travel instead of document size.

use alloc::vec::Vec;

/// Minimum gap opened whenever the buffer grows
const MIN_GAP: usize = 64;

/// Editable byte sequence backed by a gap buffer
#[derive(Debug, Clone)]
pub struct GapBuffer {
    data: Vec<u8>,
    gap_start: usize,
    gap_end: usize,
}

impl GapBuffer {
    /// Creates an empty buffer
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            gap_start: 0,
            gap_end: 0,
        }
    }

    /// Creates a buffer holding `bytes`, with the gap at the end
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let data = bytes.to_vec();
        let len = data.len();
        Self {
            data,
            gap_start: len,
            gap_end: len,
        }
    }

    /// Number of logical bytes (the gap is not counted)
    pub fn len(&self) -> usize {
        self.data.len() - (self.gap_end - self.gap_start)
    }

    /// Returns true if the buffer holds no bytes
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads the byte at logical index `index`
    pub fn get(&self, index: usize) -> Option<u8> {
        if index >= self.len() {
            return None;
        }
        let physical = if index < self.gap_start {
            index
        } else {
            index + (self.gap_end - self.gap_start)
        };
        Some(self.data[physical])
    }

    /// Inserts `byte` at logical index `index`, shifting the tail right.
    ///
    /// Out-of-range indices clamp to the end of the buffer.
    pub fn insert(&mut self, index: usize, byte: u8) {
        let index = index.min(self.len());
        if self.gap_start == self.gap_end {
            self.grow();
        }
        self.move_gap(index);
        self.data[self.gap_start] = byte;
        self.gap_start += 1;
    }

    /// Removes and returns the byte at logical index `index`
    pub fn remove(&mut self, index: usize) -> Option<u8> {
        if index >= self.len() {
            return None;
        }
        self.move_gap(index);
        let byte = self.data[self.gap_end];
        self.gap_end += 1;
        Some(byte)
    }

    /// Copies the logical contents out into a contiguous vector
    pub fn to_vec(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len());
        out.extend_from_slice(&self.data[..self.gap_start]);
        out.extend_from_slice(&self.data[self.gap_end..]);
        out
    }

    /// Iterates over the logical bytes in order
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.data[..self.gap_start]
            .iter()
            .chain(self.data[self.gap_end..].iter())
            .copied()
    }

    /// Slides the gap so that it starts at logical index `to`
    fn move_gap(&mut self, to: usize) {
        if to < self.gap_start {
            let shift = self.gap_start - to;
            self.data.copy_within(to..self.gap_start, self.gap_end - shift);
            self.gap_start = to;
            self.gap_end -= shift;
        } else if to > self.gap_start {
            let shift = to - self.gap_start;
            self.data
                .copy_within(self.gap_end..self.gap_end + shift, self.gap_start);
            self.gap_start += shift;
            self.gap_end += shift;
        }
    }

    /// Reallocates with a fresh gap at the current gap position
    fn grow(&mut self) {
        let grow_by = self.len().max(MIN_GAP);
        let mut next = Vec::with_capacity(self.data.len() + grow_by);
        next.extend_from_slice(&self.data[..self.gap_start]);
        next.resize(self.gap_start + grow_by, 0);
        next.extend_from_slice(&self.data[self.gap_end..]);
        self.gap_end = self.gap_start + grow_by;
        self.data = next;
    }
}

impl Default for GapBuffer {
    fn default() -> Self {
        Self::new()
    }
}
