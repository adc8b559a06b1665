#![no_std]

//! # Document Core
//!
//! The editable-document engine for Draftpad: a gap-buffered byte sequence
//! plus the cursor bookkeeping that keeps a linear offset, row/column and
//! remembered column consistent across every edit.
//!
//! ## Philosophy
//!
//! - **No_std compatible**: Uses alloc but not std
//! - **Deterministic**: Same operation sequence => same buffer state
//! - **Incremental bookkeeping**: row/col maintenance is bounded by the
//!   line(s) an operation touches, never a whole-document rescan
//! - **No failure modes**: every boundary case degrades to a clamp or no-op
//! - **Mechanism over policy**: the buffer provides editing primitives,
//!   hosts decide input handling and rendering
//!
//! ## Design
//!
//! The core provides:
//! - GapBuffer: the editable byte sequence (indexed access, localized edits)
//! - TextBuffer: document + cursor state with move/insert/remove
//! - BufferSnapshot: deterministic state capture for parity testing

extern crate alloc;

pub mod buffer;
pub mod document;
pub mod snapshot;

pub use buffer::{Direction, Position, TextBuffer};
pub use document::GapBuffer;
pub use snapshot::BufferSnapshot;
